use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use physics::{BlockSim, Snapshot};
use runtime::{run, Cli, Input, Presenter, RunOptions, ScenarioOverrides};

/// 1/64 s is exact in binary floating point, so frame deltas convert to
/// whole nanoseconds without rounding.
const FRAME_SECONDS: f64 = 1.0 / 64.0;

/// Presenter with a scripted clock: each presented frame moves time forward
/// by a fixed amount.
struct ScriptedPresenter {
    time: f64,
    frame_seconds: f64,
    frame_budget: u64,
    frames: Vec<Snapshot>,
    reload_on_frame: Option<u64>,
}

impl ScriptedPresenter {
    fn new(frame_budget: u64) -> Self {
        Self {
            time: 0.0,
            frame_seconds: FRAME_SECONDS,
            frame_budget,
            frames: Vec::new(),
            reload_on_frame: None,
        }
    }
}

impl Presenter for ScriptedPresenter {
    fn now_seconds(&self) -> f64 {
        self.time
    }

    fn poll_input(&mut self) -> Input {
        let presented = self.frames.len() as u64;
        if presented >= self.frame_budget {
            Input::Quit
        } else if self.reload_on_frame == Some(presented) {
            Input::Reload
        } else {
            Input::Continue
        }
    }

    fn present(&mut self, frame: &Snapshot) -> Result<()> {
        self.frames.push(*frame);
        self.time += self.frame_seconds;
        Ok(())
    }
}

#[test]
fn loop_runs_one_step_batch_per_frame() -> Result<()> {
    let mut sim = BlockSim::classic()?;
    let mut presenter = ScriptedPresenter::new(65);

    let summary = run(&mut sim, &mut presenter, &RunOptions::default())?;

    // First frame sees no elapsed time; the other 64 cover exactly one second.
    assert_eq!(summary.frames, 65);
    assert_eq!(summary.steps, 2_000);
    assert_eq!(summary.elapsed, Duration::from_secs(1));
    assert_eq!(presenter.frames[0].steps, 0);
    assert_eq!(presenter.frames[1].steps, 31);
    Ok(())
}

#[test]
fn leftover_time_is_carried_between_frames() -> Result<()> {
    let mut sim = BlockSim::classic()?;
    let mut presenter = ScriptedPresenter::new(5);

    run(&mut sim, &mut presenter, &RunOptions::default())?;

    // 15.625 ms per frame is 31.25 steps: every fourth frame gets an extra one.
    let steps: Vec<u64> = presenter
        .frames
        .windows(2)
        .map(|pair| pair[1].steps - pair[0].steps)
        .collect();
    assert_eq!(steps, vec![31, 31, 31, 32]);
    Ok(())
}

#[test]
fn presented_frames_never_overlap() -> Result<()> {
    let mut sim = BlockSim::classic()?;
    let mut presenter = ScriptedPresenter::new(400);

    run(&mut sim, &mut presenter, &RunOptions::default())?;

    for frame in &presenter.frames {
        assert!(frame.large.position.x >= frame.small.right());
        assert!(frame.small.position.x >= frame.wall_x);
    }
    Ok(())
}

#[test]
fn until_settled_stops_after_last_collision() -> Result<()> {
    let mut sim = BlockSim::classic()?;
    let mut presenter = ScriptedPresenter::new(u64::MAX);
    let options = RunOptions {
        until_settled: true,
        ..RunOptions::default()
    };

    let summary = run(&mut sim, &mut presenter, &options)?;

    assert!(summary.settled);
    assert_eq!(summary.collisions, 31);
    assert_eq!(presenter.frames.last().map(|f| f.collision_count), Some(31));
    Ok(())
}

#[test]
fn quit_stops_after_the_current_frame() -> Result<()> {
    let mut sim = BlockSim::classic()?;
    let mut presenter = ScriptedPresenter::new(1);

    let summary = run(&mut sim, &mut presenter, &RunOptions::default())?;

    assert_eq!(summary.frames, 1);
    assert_eq!(summary.steps, 0);
    Ok(())
}

#[test]
fn reload_without_scenario_file_keeps_running() -> Result<()> {
    let mut sim = BlockSim::classic()?;
    let mut presenter = ScriptedPresenter::new(10);
    presenter.reload_on_frame = Some(3);

    let summary = run(&mut sim, &mut presenter, &RunOptions::default())?;

    assert_eq!(summary.frames, 10);
    assert_eq!(summary.steps, presenter.frames[9].steps);
    Ok(())
}

/// Write `json` to a scenario file unique to this test process.
fn scenario_file(name: &str, json: &str) -> Result<PathBuf> {
    let path = std::env::temp_dir().join(format!("blocks-{}-{name}.json", std::process::id()));
    std::fs::write(&path, json)?;
    Ok(path)
}

#[test]
fn reload_swaps_in_a_fresh_simulation() -> Result<()> {
    let path = scenario_file("fresh", "{}")?;
    let mut sim = BlockSim::classic()?;
    let mut presenter = ScriptedPresenter::new(61);
    presenter.reload_on_frame = Some(60);
    let options = RunOptions {
        scenario: Some(path.clone()),
        ..RunOptions::default()
    };

    run(&mut sim, &mut presenter, &options)?;
    std::fs::remove_file(&path)?;

    // The large block reaches the small one after 0.84 s, frame 59 is at 0.92 s.
    let before = presenter.frames[59];
    let after = presenter.frames[60];
    assert!(before.collision_count > 0);
    assert_eq!(before.steps, 1_843);
    assert_eq!(after.collision_count, 0);
    assert_eq!(after.steps, 31);
    assert!((after.large.position.x - (224.0 - 31.0 * 0.05)).abs() < 1e-3);
    Ok(())
}

#[test]
fn broken_reload_keeps_the_current_simulation() -> Result<()> {
    let cases = [
        ("unparsable", "{ not json"),
        ("massless", r#"{ "small": { "position": [116.0, 120.0], "width": 24.0, "mass": 0.0 } }"#),
    ];
    for (name, json) in cases {
        let path = scenario_file(name, json)?;
        let mut sim = BlockSim::classic()?;
        let mut presenter = ScriptedPresenter::new(61);
        presenter.reload_on_frame = Some(60);
        let options = RunOptions {
            scenario: Some(path.clone()),
            ..RunOptions::default()
        };

        let summary = run(&mut sim, &mut presenter, &options)?;
        std::fs::remove_file(&path)?;

        let before = presenter.frames[59];
        let after = presenter.frames[60];
        assert_eq!(summary.frames, 61, "{name}");
        assert_eq!(after.steps, 1_875, "{name}");
        assert!(after.collision_count >= before.collision_count, "{name}");
        assert!(after.collision_count > 0, "{name}");
    }
    Ok(())
}

#[test]
fn reload_keeps_command_line_overrides() -> Result<()> {
    let path = scenario_file("overrides", "{}")?;
    let cli = Cli::try_parse_from([
        "blocks",
        "--scenario",
        path.to_str().unwrap(),
        "--fixed-dt",
        "0.001",
        "--max-steps-per-frame",
        "5",
        "--watch",
    ])?;
    let mut sim = cli.scenario_config()?.build()?;
    let mut presenter = ScriptedPresenter::new(5);
    presenter.reload_on_frame = Some(2);
    let options = RunOptions {
        scenario: cli.scenario.clone(),
        overrides: cli.overrides(),
        ..RunOptions::default()
    };
    assert_eq!(
        options.overrides,
        ScenarioOverrides {
            fixed_dt: Some(0.001),
            max_steps_per_frame: Some(5),
        }
    );

    run(&mut sim, &mut presenter, &options)?;
    std::fs::remove_file(&path)?;

    assert_eq!(sim.fixed_dt(), Duration::from_millis(1));
    assert_eq!(sim.timestep().max_steps(), Some(5));
    // 15.625 ms is 15 steps of 1 ms, capped at 5 per frame.
    assert_eq!(presenter.frames[2].steps, 5);
    assert_eq!(presenter.frames[4].steps, 15);
    Ok(())
}

struct FailingPresenter;

impl Presenter for FailingPresenter {
    fn now_seconds(&self) -> f64 {
        0.0
    }

    fn poll_input(&mut self) -> Input {
        Input::Continue
    }

    fn present(&mut self, _frame: &Snapshot) -> Result<()> {
        anyhow::bail!("display lost")
    }
}

#[test]
fn presenter_errors_stop_the_loop() -> Result<()> {
    let mut sim = BlockSim::classic()?;

    let err = run(&mut sim, &mut FailingPresenter, &RunOptions::default()).unwrap_err();

    assert_eq!(err.to_string(), "display lost");
    Ok(())
}
