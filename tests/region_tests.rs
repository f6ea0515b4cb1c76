use plot1d::{PlotError, RegionId, RegionManager, Sample};

fn data() -> Vec<Sample> {
    [1.0, 3.0, 7.0, 10.0]
        .iter()
        .map(|&x| Sample::new(x, 1.0))
        .collect()
}

#[test]
fn test_full_region_lifecycle() {
    let samples = data();
    let mut rm = RegionManager::new();

    let id = rm.begin_region(4.2);
    rm.update_region(id, 4.2, 8.0).unwrap();
    let live = rm.get(id).unwrap();
    assert_eq!((live.left, live.right), (4.2, 8.0));

    let snapped = rm.end_region(id, &samples).unwrap();
    assert_eq!((snapped.left, snapped.right), (3.0, 7.0));
    assert_eq!(snapped.name, "A");
    assert_eq!(snapped.shortname(), "brush_A");

    let removed = rm.delete_region(id).unwrap();
    assert!(removed.marked_for_deletion);
    assert!(!removed.active);
    assert!(rm.is_empty());
}

#[test]
fn test_name_after_deletion_is_not_reused() {
    let mut rm = RegionManager::new();
    let _a = rm.begin_region(1.0);
    let b = rm.begin_region(2.0);
    rm.delete_region(b).unwrap();
    let c = rm.begin_region(3.0);
    assert_eq!(rm.get(c).unwrap().name, "C");
    let names: Vec<_> = rm.list_regions().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["A", "C"]);
}

#[test]
fn test_counter_survives_clear() {
    let mut rm = RegionManager::new();
    rm.begin_region(1.0);
    rm.begin_region(2.0);
    assert_eq!(rm.clear().len(), 2);
    let id = rm.begin_region(3.0);
    assert_eq!(id, RegionId(2));
    assert_eq!(rm.get(id).unwrap().name, "C");
}

#[test]
fn test_names_roll_over_after_z() {
    assert_eq!(RegionId(25).name(), "Z");
    assert_eq!(RegionId(26).name(), "AA");
    assert_eq!(RegionId(27).name(), "AB");
    assert_eq!(RegionId(26 + 26 * 26).name(), "AAA");
}

#[test]
fn test_unknown_region() {
    let mut rm = RegionManager::new();
    let ghost = RegionId(7);
    assert_eq!(
        rm.update_region(ghost, 0.0, 1.0).unwrap_err(),
        PlotError::RegionNotFound(ghost)
    );
    assert_eq!(
        rm.delete_region(ghost).unwrap_err(),
        PlotError::RegionNotFound(ghost)
    );
}

#[test]
fn test_end_without_samples_leaves_region_untouched() {
    let mut rm = RegionManager::new();
    let id = rm.begin_region(2.0);
    rm.update_region(id, 5.0, 2.0).unwrap();
    assert_eq!(rm.end_region(id, &[]).unwrap_err(), PlotError::EmptyData);
    let r = rm.get(id).unwrap();
    assert_eq!((r.left, r.right), (5.0, 2.0));
}

#[test]
fn test_deleting_first_region_still_yields_c() {
    let mut rm = RegionManager::new();
    let a = rm.begin_region(1.0);
    rm.begin_region(2.0);
    rm.delete_region(a).unwrap();
    let c = rm.begin_region(3.0);
    assert_eq!(rm.get(c).unwrap().name, "C");
    assert!(rm.list_regions().iter().all(|r| !r.marked_for_deletion));
    assert!(rm.get(a).is_none());
}
