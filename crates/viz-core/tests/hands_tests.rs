// Hand landmark resolution into an interaction center and closeness.

use glam::Vec3;
use viz_core::hands::{Hand, HandInteraction};

#[test]
fn no_hands_means_no_interaction() {
    assert_eq!(HandInteraction::resolve(&[]), None);
}

#[test]
fn hands_without_landmarks_are_skipped() {
    let empty = Hand::default();
    assert_eq!(HandInteraction::resolve(&[empty.clone()]), None);

    // One empty and one tracked hand resolves as a single hand.
    let tracked = Hand::from_wrist(0.5, 0.5);
    let hit = HandInteraction::resolve(&[empty, tracked]).expect("one usable wrist");
    assert_eq!(hit.closeness, None);
}

#[test]
fn single_hand_maps_to_the_world_window() {
    let hit = HandInteraction::resolve(&[Hand::from_wrist(0.25, 0.75)]).unwrap();
    assert!((hit.center - Vec3::new(5.0, -3.75, 0.0)).length() < 1e-6);
    assert_eq!(hit.closeness, None);

    // Camera center lands on the world origin.
    let hit = HandInteraction::resolve(&[Hand::from_wrist(0.5, 0.5)]).unwrap();
    assert!(hit.center.length() < 1e-6);
}

#[test]
fn two_hands_give_closeness_and_a_midpoint_center() {
    let h1 = Hand::from_wrist(0.2, 0.5);
    let h2 = Hand::from_wrist(0.8, 0.5);
    let hit = HandInteraction::resolve(&[h1, h2]).unwrap();
    let closeness = hit.closeness.expect("two hands have closeness");
    assert!((closeness - 0.6).abs() < 1e-6);
    // (0.5-0.2)+(0.5-0.8) = 0, both axes symmetric around center.
    assert!(hit.center.length() < 1e-6);

    let h1 = Hand::from_wrist(0.1, 0.2);
    let h2 = Hand::from_wrist(0.3, 0.4);
    let hit = HandInteraction::resolve(&[h1, h2]).unwrap();
    assert!((hit.center - Vec3::new(6.0, 3.0, 0.0)).length() < 1e-5);
}

#[test]
fn coincident_hands_have_zero_closeness() {
    let h = Hand::from_wrist(0.4, 0.6);
    let hit = HandInteraction::resolve(&[h.clone(), h]).unwrap();
    assert_eq!(hit.closeness, Some(0.0));
}

#[test]
fn extra_hands_beyond_two_are_ignored() {
    let h1 = Hand::from_wrist(0.2, 0.5);
    let h2 = Hand::from_wrist(0.8, 0.5);
    let h3 = Hand::from_wrist(0.0, 0.0);
    let two = HandInteraction::resolve(&[h1.clone(), h2.clone()]).unwrap();
    let three = HandInteraction::resolve(&[h1, h2, h3]).unwrap();
    assert_eq!(two, three);
}
