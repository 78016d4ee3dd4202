// Whole-frame behaviour through the public API, on a recording surface.

use timeline_engine::render::{DrawCommand, Recorder, Surface};
use timeline_engine::{BranchSpec, GrowthPolicy, Timeline, TimelineConfig};

fn timeline(config: TimelineConfig) -> Timeline {
    Timeline::new(config).expect("valid config")
}

#[test]
fn first_frame_starts_on_the_midline() {
    let mut tl = timeline(TimelineConfig::default());
    let mut rec = Recorder::new(800, 600);
    tl.frame(&mut rec);

    let first = tl.samples()[0];
    assert_eq!(first.pos.y, 300.0);
    assert_eq!(tl.samples().len(), 800);
}

#[test]
fn thickness_stays_in_range_and_peaks_at_center() {
    let cfg = TimelineConfig::default();
    let (min, max) = (cfg.main.min_width, cfg.main.max_width);
    let mut tl = timeline(cfg);
    let mut rec = Recorder::new(1000, 400);
    tl.frame(&mut rec);

    let samples = tl.samples();
    assert!(samples.iter().all(|s| s.thickness >= min && s.thickness <= max));
    assert_eq!(samples[500].thickness, max);

    // Non-increasing moving away from the center, on both sides
    for x in 500..999 {
        assert!(samples[x + 1].thickness <= samples[x].thickness);
    }
    for x in (1..=500).rev() {
        assert!(samples[x - 1].thickness <= samples[x].thickness);
    }
}

#[test]
fn branch_lengths_are_monotone_and_capped() {
    let mut cfg = TimelineConfig::default();
    cfg.branch.growth_speed = 7.0;
    cfg.branch.max_length = 50.0;
    let max = cfg.branch.max_length;
    let mut tl = timeline(cfg);
    let mut rec = Recorder::new(800, 400);

    let mut prev: Vec<f64> = tl.branches().iter().map(|b| b.length()).collect();
    for _ in 0..20 {
        tl.frame(&mut rec);
        for (b, p) in tl.branches().iter().zip(&prev) {
            assert!(b.length() >= *p);
            assert!(b.length() <= max);
        }
        prev = tl.branches().iter().map(|b| b.length()).collect();
    }
    assert!(tl.branches().iter().all(|b| b.length() == max));
}

#[test]
fn shrink_skips_branch_then_resumes() {
    let mut tl = timeline(TimelineConfig::default());
    let mut rec = Recorder::new(800, 400);

    tl.frame(&mut rec);
    let before = tl.branches()[2].length();
    assert!(before > 0.0);

    // Viewport shrinks below the third branch (x = 600)
    rec.set_size(500, 400);
    let stats = tl.frame(&mut rec);
    assert_eq!(stats.skipped, 1);
    assert_eq!(tl.branches()[2].length(), before);
    assert!(tl.branches()[2].shape().is_none());

    rec.set_size(800, 400);
    let stats = tl.frame(&mut rec);
    assert_eq!(stats.skipped, 0);
    assert_eq!(stats.drawn, 3);
    assert!(tl.branches()[2].length() > before);
}

#[test]
fn empty_surface_draws_nothing_and_keeps_going() {
    let mut tl = timeline(TimelineConfig::default());
    let mut rec = Recorder::new(0, 0);
    let stats = tl.frame(&mut rec);
    assert_eq!(stats.samples, 0);
    assert_eq!(stats.drawn, 0);
    assert_eq!(rec.commands(), &[DrawCommand::Clear]);
    assert!(tl.clock() > 0.0);
}

#[test]
fn policy_selects_branch_geometry() {
    let count_quads = |rec: &Recorder| {
        rec.commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::QuadTo(..)))
            .count()
    };

    let mut repel = timeline(TimelineConfig::default());
    let mut rec = Recorder::new(800, 400);
    repel.frame(&mut rec);
    assert_eq!(count_quads(&rec), 0);

    let mut cfg = TimelineConfig::default();
    cfg.branch.policy = GrowthPolicy::Bow;
    let mut bow = timeline(cfg);
    bow.frame(&mut rec);
    assert_eq!(count_quads(&rec), 3);
}

#[test]
fn custom_branches_from_json() {
    let cfg = TimelineConfig::from_json(
        r#"{ "branches": [ { "index": 10, "angle_offset": 1.0 }, { "index": 90, "angle_offset": -1.0 } ] }"#,
    )
    .unwrap();
    let mut tl = timeline(cfg);
    let mut rec = Recorder::new(100, 100);
    let stats = tl.frame(&mut rec);

    assert_eq!(stats.drawn, 2);
    assert_eq!(tl.branches()[0].index(), 10);
    assert_eq!(tl.config().branches[1], BranchSpec::new(90, -1.0));
}
