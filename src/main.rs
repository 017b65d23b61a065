use anyhow::Context;
use env_logger::Builder;
use rig_cleaner_rs::rig::shared::config::{ActionKind, Config};
use rig_cleaner_rs::rig::shared::enums::ReportLevel;
use rig_cleaner_rs::rig::shared::structs::{Classification, Report};
use rig_cleaner_rs::rig::shared::traits::{LogReporter, Operator, OperatorResult, Reporter, SceneHost};
use rig_cleaner_rs::rig::shared::util::load_scene;
use rig_cleaner_rs::rig::{classify_armature, RemoveUnusedBones, SelectUnusedBones};
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;

#[derive(Serialize)]
struct RunReport {
    file: String,
    operator: &'static str,
    armature: Option<String>,
    finished: bool,
    count: usize,
    classification: Option<Classification>,
    reports: Vec<Report>,
    remaining_joints: Vec<String>,
}

#[derive(Default)]
struct RunReporter {
    reports: Vec<Report>,
}

impl Reporter for RunReporter {
    fn report(&mut self, level: ReportLevel, message: &str) {
        LogReporter.report(level, message);
        self.reports.report(level, message);
    }
}

fn main() -> anyhow::Result<()> {
    let config = Config::from_env(std::env::args().nth(1))?;
    Builder::new()
        .filter(None, config.log_level)
        .default_format()
        .init();

    log::info!("Loading rig: {}", config.rig_file.display());
    let mut scene = load_scene(&config.rig_file)?;
    if let Some(name) = config.armature.as_deref() {
        let key = scene
            .find_object(name)
            .with_context(|| format!("No object named '{}' in the scene.", name))?;
        scene.set_active(Some(key))?;
    }

    let armature = scene.active_object();
    // Snapshot of the rig before the operator runs. The operator reports the
    // same warnings itself, so this pass's reports are dropped.
    let classification = match armature {
        Some(key) if scene.skeleton(key).is_some() => Some(classify_armature(
            &scene,
            key,
            &mut Vec::<Report>::new(),
        )?),
        _ => None,
    };

    let mut reporter = RunReporter::default();
    let (operator, result) = match config.action {
        ActionKind::Select => (
            SelectUnusedBones.id(),
            SelectUnusedBones.execute(&mut scene, &mut reporter),
        ),
        ActionKind::Remove => (
            RemoveUnusedBones.id(),
            RemoveUnusedBones.execute(&mut scene, &mut reporter),
        ),
    };

    let (finished, count) = match result {
        OperatorResult::Finished { count } => (true, count),
        OperatorResult::Cancelled => (false, 0),
    };
    let remaining_joints = armature
        .and_then(|key| scene.skeleton(key))
        .map(|skeleton| skeleton.joint_names().map(str::to_string).collect())
        .unwrap_or_default();
    let report = RunReport {
        file: config.rig_file.display().to_string(),
        operator,
        armature: armature
            .and_then(|key| scene.object_name(key))
            .map(str::to_string),
        finished,
        count,
        classification,
        reports: reporter.reports,
        remaining_joints,
    };

    match config.report_file.as_ref() {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create report file: {}", path.display()))?;
            serde_json::to_writer_pretty(BufWriter::new(file), &report)?;
            log::info!("Report written to {}", path.display());
        }
        None => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    if !finished {
        anyhow::bail!("{} was cancelled.", operator);
    }
    Ok(())
}
