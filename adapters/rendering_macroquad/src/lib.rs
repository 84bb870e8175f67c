#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Macroquad-backed showcase for the Proxy Defense renderer.
//!
//! The showcase is silent, so macroquad is built without its default `audio`
//! feature and the crate links no sound libraries.
//!
//! The drawers never touch macroquad directly: [`MacroquadSurface`] adapts the
//! backend-agnostic `DrawSurface` contract, and [`ShowcaseBackend`] owns the
//! window loop, the frame clock and the jitter source.

mod config;
mod surface;

pub use config::{ShowcaseConfig, ShowcaseSettings, WindowConfig};
pub use surface::MacroquadSurface;

use anyhow::Result;
use macroquad::input::{is_key_pressed, KeyCode};
use proxy_defense_rendering::{Color, Frame, SeededRandom};
use std::{
    collections::VecDeque,
    time::{Duration, Instant},
};

const BACKGROUND: Color = Color::from_rgb_u8(18, 18, 28);

/// Windowed gallery that animates every sprite and effect until `Escape` or `Q`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ShowcaseBackend {
    swap_interval: Option<i32>,
    show_fps: bool,
    seed: Option<u64>,
}

impl ShowcaseBackend {
    /// Returns a backend that follows the configuration for vsync and seeding.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the backend to request a specific swap interval from the platform.
    #[must_use]
    pub fn with_swap_interval(mut self, swap_interval: Option<i32>) -> Self {
        self.swap_interval = swap_interval;
        self
    }

    /// Configures the backend to either synchronise presentation with the display refresh rate
    /// or render as fast as possible, overriding the configuration.
    #[must_use]
    pub fn with_vsync(self, enabled: bool) -> Self {
        let swap_interval = if enabled { Some(1) } else { Some(0) };
        self.with_swap_interval(swap_interval)
    }

    /// Configures whether the backend logs frame timing metrics once per second.
    #[must_use]
    pub fn with_show_fps(mut self, show: bool) -> Self {
        self.show_fps = show;
        self
    }

    /// Seeds the jitter source, overriding the configuration.
    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Opens the showcase window and blocks until it is closed.
    pub fn run(self, config: ShowcaseConfig) -> Result<()> {
        config.validate()?;

        let Self {
            swap_interval,
            show_fps,
            seed,
        } = self;
        let seed = seed.or(config.showcase.seed);
        let swap_interval =
            swap_interval.or(Some(if config.window.vsync { 1 } else { 0 }));
        let layout = config.layout();

        let mut window = macroquad::window::Conf {
            window_title: config.window.title.clone(),
            window_width: config.window.width,
            window_height: config.window.height,
            ..macroquad::window::Conf::default()
        };
        window.platform.swap_interval = swap_interval;

        log::debug!(
            "starting showcase {}x{} (swap interval {:?}, seed {:?})",
            config.window.width,
            config.window.height,
            swap_interval,
            seed
        );

        macroquad::Window::from_config(window, async move {
            let background = to_macroquad_color(BACKGROUND);
            let mut surface = MacroquadSurface::new();
            let mut random = match seed {
                Some(seed) => SeededRandom::from_seed(seed),
                None => SeededRandom::from_entropy(),
            };
            let mut fps_counter = FpsCounter::default();

            loop {
                if is_key_pressed(KeyCode::Escape) || is_key_pressed(KeyCode::Q) {
                    break;
                }

                macroquad::window::clear_background(background);

                let dt_seconds = macroquad::time::get_frame_time();
                let frame_dt = Duration::from_secs_f32(dt_seconds.max(0.0));
                let now_millis = macroquad::time::get_time() * 1_000.0;

                let render_start = Instant::now();
                let mut frame = Frame::new(now_millis, &mut random);
                layout.render(&mut surface, &mut frame);
                let render_duration = render_start.elapsed();

                let fps_metrics = fps_counter.record_frame(FrameBreakdown {
                    frame: frame_dt,
                    render: render_duration,
                });
                if show_fps {
                    if let Some(FpsMetrics {
                        per_second,
                        trailing_ten_seconds,
                        avg_render,
                    }) = fps_metrics
                    {
                        log::info!(
                            "FPS: {:.2} (10s avg: {:.2}) | render: {:>6.2}ms",
                            per_second,
                            trailing_ten_seconds,
                            avg_render.as_secs_f64() * 1_000.0,
                        );
                    }
                }

                macroquad::window::next_frame().await;
            }
        });

        log::debug!("showcase window closed");
        Ok(())
    }
}

/// Durations measured for a single rendered frame.
#[derive(Clone, Copy, Debug, Default)]
struct FrameBreakdown {
    frame: Duration,
    render: Duration,
}

/// Tracks the average frames-per-second produced by the render loop.
#[derive(Debug, Default)]
struct FpsCounter {
    elapsed: Duration,
    frames: u32,
    frame_times: VecDeque<Duration>,
    window_duration: Duration,
    render_accum: Duration,
}

#[derive(Clone, Copy, Debug)]
struct FpsMetrics {
    per_second: f32,
    trailing_ten_seconds: f32,
    avg_render: Duration,
}

impl FpsCounter {
    /// Records a rendered frame and returns the per-second and trailing ten-second averages once
    /// one second has elapsed.
    fn record_frame(&mut self, breakdown: FrameBreakdown) -> Option<FpsMetrics> {
        self.elapsed += breakdown.frame;
        self.frames = self.frames.saturating_add(1);
        self.render_accum += breakdown.render;

        self.frame_times.push_back(breakdown.frame);
        self.window_duration += breakdown.frame;

        let trailing_window = Duration::from_secs(10);
        while self.window_duration > trailing_window {
            if let Some(removed) = self.frame_times.pop_front() {
                self.window_duration = self.window_duration.saturating_sub(removed);
            } else {
                break;
            }
        }

        if self.elapsed < Duration::from_secs(1) {
            return None;
        }

        let seconds = self.elapsed.as_secs_f32();
        let per_second = self.frames as f32 / seconds;
        let window_seconds = self.window_duration.as_secs_f32();
        let trailing_ten_seconds = if window_seconds <= f32::EPSILON {
            per_second
        } else {
            self.frame_times.len() as f32 / window_seconds
        };
        let avg_render = self.render_accum / self.frames.max(1);

        self.elapsed = Duration::ZERO;
        self.frames = 0;
        self.render_accum = Duration::ZERO;
        Some(FpsMetrics {
            per_second,
            trailing_ten_seconds,
            avg_render,
        })
    }
}

fn to_macroquad_color(color: Color) -> macroquad::color::Color {
    macroquad::color::Color::new(color.red, color.green, color.blue, color.alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(millis: u64) -> FrameBreakdown {
        FrameBreakdown {
            frame: Duration::from_millis(millis),
            render: Duration::from_millis(2),
        }
    }

    #[test]
    fn fps_counter_reports_average_frames_per_second() {
        let mut counter = FpsCounter::default();
        assert!(counter.record_frame(frame(250)).is_none());
        assert!(counter.record_frame(frame(250)).is_none());
        assert!(counter.record_frame(frame(250)).is_none());

        let metrics = counter
            .record_frame(frame(250))
            .expect("should report FPS after one second of samples");
        assert!((metrics.per_second - 4.0).abs() <= 1e-3);
        assert!((metrics.trailing_ten_seconds - 4.0).abs() <= 1e-3);
        assert_eq!(metrics.avg_render, Duration::from_millis(2));
        assert!(counter.record_frame(frame(250)).is_none());
    }

    #[test]
    fn fps_counter_tracks_trailing_ten_second_average() {
        let mut counter = FpsCounter::default();

        for _ in 0..10 {
            for sample in 0..5 {
                let metrics = counter.record_frame(frame(200));
                if sample == 4 {
                    let metrics = metrics.expect("should report every second");
                    assert!((metrics.per_second - 5.0).abs() <= 1e-3);
                    assert!((metrics.trailing_ten_seconds - 5.0).abs() <= 1e-3);
                } else {
                    assert!(metrics.is_none());
                }
            }
        }

        for sample in 0..10 {
            let metrics = counter.record_frame(frame(100));
            if sample == 9 {
                let metrics = metrics.expect("should report every second");
                assert!((metrics.per_second - 10.0).abs() <= 1e-3);
                assert!((metrics.trailing_ten_seconds - 5.5).abs() <= 1e-3);
            } else {
                assert!(metrics.is_none());
            }
        }
    }

    #[test]
    fn macroquad_color_keeps_channels() {
        let color = to_macroquad_color(Color::new(0.1, 0.2, 0.3, 0.4));

        assert_eq!(
            (color.r, color.g, color.b, color.a),
            (0.1, 0.2, 0.3, 0.4)
        );
    }

    #[test]
    fn builder_overrides_are_recorded() {
        let backend = ShowcaseBackend::new()
            .with_vsync(false)
            .with_show_fps(true)
            .with_seed(Some(9));

        assert_eq!(backend.swap_interval, Some(0));
        assert!(backend.show_fps);
        assert_eq!(backend.seed, Some(9));
    }

    #[test]
    fn run_rejects_invalid_configuration_before_opening_a_window() {
        let mut config = ShowcaseConfig::default();
        config.showcase.attack_period_ms = 0;

        assert!(ShowcaseBackend::new().run(config).is_err());
    }
}
