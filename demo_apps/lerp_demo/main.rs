//! Drives one lerp of every value type from a simulated fixed-step frame loop.
//!
//! ```text
//! RUST_LOG=info cargo run -p lerp_demo -- [scenario.json]
//! ```
//!
//! Without an argument the built-in scenario is used. The position lerp is paused
//! and resumed at the frames listed in `toggle_pause_frames`, like pressing space
//! in an interactive viewer.

use anyhow::Context;
use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use autolerp::{
    Color, Color32, Color32Lerp, ColorLerp, FloatLerp, LerpSettings, ManualClock,
    QuaternionLerp, TimeSource, TimedLerp, Vector2Lerp, Vector3Lerp,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DemoScenario {
    /// Simulated frames per second.
    frame_rate: f32,
    /// Safety cap on the number of simulated frames.
    max_frames: u32,
    /// Log every n-th frame.
    log_every: u32,
    toggle_pause_frames: Vec<u32>,

    float: LerpSettings<f32>,
    vector2: LerpSettings<Vec2>,
    position: LerpSettings<Vec3>,
    /// Euler angles in degrees.
    rotation: LerpSettings<Vec3>,
    color: LerpSettings<Color>,
    color32: LerpSettings<Color32>,
}

impl Default for DemoScenario {
    fn default() -> Self {
        let duration = 5.0;
        Self {
            frame_rate: 60.0,
            max_frames: 10_000,
            log_every: 30,
            toggle_pause_frames: vec![90, 150],
            float: LerpSettings::new(0.0, 10.0, duration),
            vector2: LerpSettings::new(Vec2::ZERO, Vec2::new(4.0, -2.0), duration),
            position: LerpSettings::new(Vec3::new(-5.0, 0.0, 0.0), Vec3::new(5.0, 0.0, 0.0), duration),
            rotation: LerpSettings::new(Vec3::ZERO, Vec3::new(0.0, 180.0, 45.0), duration),
            color: LerpSettings::new(Color::RED, Color::BLUE, duration),
            color32: LerpSettings::new(Color32::BLACK, Color32::WHITE, duration),
        }
    }
}

struct Demo {
    clock: ManualClock,
    float: FloatLerp<ManualClock>,
    vector2: Vector2Lerp<ManualClock>,
    position: Vector3Lerp<ManualClock>,
    rotation: QuaternionLerp<ManualClock>,
    color: ColorLerp<ManualClock>,
    color32: Color32Lerp<ManualClock>,
}

impl Demo {
    fn new(scenario: &DemoScenario) -> anyhow::Result<Self> {
        let clock = ManualClock::new();
        let rotation = &scenario.rotation;
        Ok(Self {
            float: scenario.float.build(clock.clone())?,
            vector2: scenario.vector2.build(clock.clone())?,
            position: scenario.position.build(clock.clone())?,
            rotation: TimedLerp::try_from_euler_degrees(
                rotation.start,
                rotation.end,
                rotation.duration,
                clock.clone(),
            )?,
            color: scenario.color.build(clock.clone())?,
            color32: scenario.color32.build(clock.clone())?,
            clock,
        })
    }

    fn start(&mut self) {
        self.float.start();
        self.vector2.start();
        self.position.start();
        self.rotation.start();
        self.color.start();
        self.color32.start();
    }

    fn all_done(&self) -> bool {
        self.float.is_done()
            && self.vector2.is_done()
            && self.position.is_done()
            && self.rotation.is_done()
            && self.color.is_done()
            && self.color32.is_done()
    }

    fn update(&mut self, frame: u32, dt: f64, scenario: &DemoScenario) {
        self.clock.advance(dt);

        if scenario.toggle_pause_frames.contains(&frame) {
            self.position.toggle_pause();
            log::info!(
                "frame {frame}: position {}",
                if self.position.is_paused() { "paused" } else { "resumed" }
            );
        }

        let float = self.float.get_value();
        let vector2 = self.vector2.get_value();
        let position = self.position.get_value();
        let rotation = self.rotation.get_value();
        let color = self.color.get_value();
        let color32 = self.color32.get_value();

        if scenario.log_every > 0 && frame % scenario.log_every == 0 {
            let (yaw, pitch, roll) = rotation.to_euler(glam::EulerRot::YXZ);
            log::info!(
                "frame {frame:>5} t={:>6.2}s float={float:>6.2} vec2=[{:.2}, {:.2}] pos=[{:.2}, {:.2}, {:.2}] ({:>5.1}%) rot=[{:.1}, {:.1}, {:.1}] color=[{:.2}, {:.2}, {:.2}, {:.2}] color32=[{}, {}, {}, {}]",
                self.clock_now(),
                vector2.x,
                vector2.y,
                position.x,
                position.y,
                position.z,
                self.position.progress() * 100.0,
                pitch.to_degrees(),
                yaw.to_degrees(),
                roll.to_degrees(),
                color.r,
                color.g,
                color.b,
                color.a,
                color32.r,
                color32.g,
                color32.b,
                color32.a,
            );
        }
    }

    fn clock_now(&self) -> f64 {
        self.clock.now()
    }
}

fn load_scenario() -> anyhow::Result<DemoScenario> {
    match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read scenario {path}"))?;
            serde_json::from_str(&json).with_context(|| format!("failed to parse scenario {path}"))
        }
        None => Ok(DemoScenario::default()),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let scenario = load_scenario()?;
    anyhow::ensure!(scenario.frame_rate > 0.0, "frame_rate must be positive");
    let dt = 1.0 / f64::from(scenario.frame_rate);

    let mut demo = Demo::new(&scenario)?;
    demo.start();

    let mut frame = 0;
    while !demo.all_done() {
        frame += 1;
        if frame > scenario.max_frames {
            log::warn!("Stopping after {} frames", scenario.max_frames);
            break;
        }
        demo.update(frame, dt, &scenario);
    }

    log::info!(
        "finished at frame {frame}, t={:.2}s: float={} position={}",
        demo.clock_now(),
        demo.float.value(),
        demo.position.value()
    );
    Ok(())
}
