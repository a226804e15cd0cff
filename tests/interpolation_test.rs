use tdm_rs::{BBox, Detection, Metadata, Track, TrackState, interpolated_range};

fn importer_track() -> Track {
    // Sparse keyframes the way a format importer would hand them over,
    // deliberately out of order: the constructor sorts.
    let detections = vec![
        Detection::new(110, BBox::new(0.0, 0.0, 40.0, 40.0)),
        Detection::new(0, BBox::new(0.0, 0.0, 10.0, 10.0)),
        Detection::new(200, BBox::new(0.0, 0.0, 40.0, 40.0)),
        Detection::new(10, BBox::new(0.0, 0.0, 20.0, 20.0)),
    ];
    let mut meta = Metadata::new();
    meta.insert("type".into(), "vehicle".into());
    Track::new("track-1", meta, detections, 0, 200)
}

#[test]
fn test_playback_window_ends_exactly_on_requested_frame() {
    let track = importer_track();
    assert!(track.interpolated);
    assert_eq!(track.state, TrackState::Active);

    let window = track.interpolated_range(1, 60).unwrap();
    assert_eq!(window.len(), 3);
    assert_eq!(window[0].frame, 0);
    assert_eq!(window[1].frame, 10);

    // trailing edge snapped to the requested frame by interpolation
    let tail = &window[2];
    assert_eq!(tail.frame, 60);
    assert_eq!(tail.bbox.unwrap().to_array(), [0.0, 0.0, 30.0, 30.0]);
    assert!(tail.is_interpolated());
}

#[test]
fn test_stepping_frame_by_frame_always_lands_on_frame() {
    let track = importer_track();
    for end in 1..200 {
        let window = track.interpolated_range(0, end).unwrap();
        assert!(!window.is_empty());
        assert_eq!(window.last().unwrap().frame, end);
    }
}

#[test]
fn test_window_past_the_track_is_empty() {
    let track = importer_track();
    assert!(interpolated_range(&track.detections, 201, 300).unwrap().is_empty());
    // inverted request is defined as empty, not an error
    assert!(interpolated_range(&track.detections, 60, 1).unwrap().is_empty());
}

#[test]
fn test_edits_keep_windows_consistent() {
    let mut track = importer_track();
    track.insert_detection(Detection::new(50, BBox::new(0.0, 0.0, 100.0, 100.0)));
    track.remove_detection(10);

    let window = track.interpolated_range(0, 50).unwrap();
    assert_eq!(window.last().unwrap().frame, 50);
    assert_eq!(
        window.last().unwrap().bbox.unwrap().to_array(),
        [0.0, 0.0, 100.0, 100.0]
    );
    // exact keyframe at the boundary, not an interpolation
    assert!(!window.last().unwrap().is_interpolated());
}
