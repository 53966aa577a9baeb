// src/main.rs
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
mod cli;
mod export;
mod gui;
mod painter;
mod plugin;
mod settings;
mod source;
mod timeline;
use std::path::Path;
use std::time::SystemTime;
use anyhow::{anyhow, Context, Result};
use clap::Parser;
use eframe::egui;
use crate::cli::{Cli, Command};
use crate::settings::AppSettings;
use crate::source::{synthetic_trace, RandomLoadSource};
use crate::timeline::{Clock, LoadTimeline, ManualClock};
fn run_demo(settings: AppSettings) -> Result<()> {
    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([settings.demo.window_width, settings.demo.window_height])
        .with_min_inner_size([480.0, 360.0])
        .with_title("Load Timeline demo");
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native(
        "Load Timeline",
        options,
        Box::new(move |_cc| Box::new(gui::LoadTimelineApp::new(settings))),
    )
    .map_err(|e| anyhow!("demo window failed: {e}"))
}
fn snapshot(settings: &AppSettings, output: &Path, width: u32, height: u32, seed: u64) -> Result<()> {
    let clock = ManualClock::new(SystemTime::now());
    let mut timeline = LoadTimeline::with_config(settings.timeline.clone(), clock.clone());
    let mut source = RandomLoadSource::seeded(seed, settings.demo.jitter);
    timeline.set_samples(synthetic_trace(
        &mut source,
        clock.now(),
        timeline.time_window_secs(),
        timeline.load_min(),
        timeline.load_max(),
    ));
    let png = export::render_timeline_png(&timeline, width, height)
        .context("failed to render snapshot")?;
    export::write_snapshot(output, &png)
        .with_context(|| format!("failed to save {}", output.display()))?;
    Ok(())
}
// 入口函数
fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let settings = AppSettings::load_or_default(cli.config.as_deref())?;
    match cli.command.unwrap_or(Command::Run) {
        Command::Run => run_demo(settings),
        Command::Describe { xml, name } => {
            let widgets = plugin::select(name.as_deref())?;
            if xml {
                println!("{}", plugin::describe_xml(&widgets));
            } else {
                println!("{}", plugin::describe_json(&widgets)?);
            }
            Ok(())
        }
        Command::Snapshot {
            output,
            width,
            height,
            seed,
        } => snapshot(&settings, &output, width, height, seed),
    }
}
