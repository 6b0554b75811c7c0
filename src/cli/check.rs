//! The check command.
//!
//! Runs every check in order: settings file, settings, Supabase probe,
//! payments probe, then instructions. Each step reports its own failures
//! and the run always completes.

use chrono::Utc;
use std::path::{Path, PathBuf};

use crate::config::{EnvFileParser, EnvFileStatus, SettingKey, SettingsSnapshot, TemplateSource};
use crate::probes::{self, HttpProber, ProbeOutcome, ProbeReport, ProbeTarget};
use crate::report::{CheckReport, EnvFileCheck, SettingCheck};
use crate::secrets::SecretPreview;
use crate::ui::hints::{self, DEFAULT_LOCAL_URL};
use crate::ui::UserInterface;

use super::args::CheckArgs;

/// Banner shown at the top of the report.
pub const REPORT_TITLE: &str = "VitaCard365 - Configuration Check";

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(project_root: &Path, args: CheckArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Get the command arguments.
    pub fn args(&self) -> &CheckArgs {
        &self.args
    }

    /// Resolved path of the settings file.
    pub fn env_path(&self) -> PathBuf {
        if self.args.env_file.is_absolute() {
            self.args.env_file.clone()
        } else {
            self.project_root.join(&self.args.env_file)
        }
    }

    /// Run every check and return what was found.
    ///
    /// Failures are reported through `ui` and recorded in the report
    /// instead of being returned.
    pub fn execute(&self, ui: &mut dyn UserInterface) -> CheckReport {
        ui.show_header(REPORT_TITLE);

        let env_path = self.env_path();
        let env_file_check = self.ensure_env_file(ui, &env_path);

        let snapshot = match &env_file_check {
            EnvFileCheck::Error { .. } => SettingsSnapshot::empty(&env_path),
            _ => match EnvFileParser::snapshot(&env_path) {
                Ok(snapshot) => snapshot,
                Err(e) => {
                    ui.error(&e.to_string());
                    SettingsSnapshot::empty(&env_path)
                }
            },
        };

        let settings = SettingCheck::from_snapshot(&snapshot, &SecretPreview::default());
        Self::report_settings(ui, &settings, &env_path);

        let probes = self.run_probes(ui, &snapshot);
        self.show_instructions(ui, &snapshot);

        let report = CheckReport {
            checked_at: Utc::now(),
            env_file: env_path,
            env_file_check,
            settings,
            probes,
        };

        if self.args.json {
            if let Err(e) = report.write_json(std::io::stdout().lock()) {
                ui.error(&format!("Failed to write JSON report: {}", e));
            }
        }

        tracing::debug!("Check finished, healthy: {}", report.is_healthy());
        report
    }

    fn ensure_env_file(&self, ui: &mut dyn UserInterface, env_path: &Path) -> EnvFileCheck {
        let name = self.args.env_file.display().to_string();
        let template = TemplateSource::from_override(self.args.template.as_deref());

        if !env_path.exists() {
            ui.error(&format!("No {} file found", name));
            ui.message(&format!("Creating a default {} file...", name));
        }

        match EnvFileParser::ensure_exists(env_path, &template) {
            Ok(status) => {
                let verb = match status {
                    EnvFileStatus::Found => "found",
                    EnvFileStatus::Created => "created",
                };
                ui.success(&format!("{} file {}", name, verb));
                status.into()
            }
            Err(e) => {
                tracing::warn!("Could not prepare settings file: {}", e);
                ui.error(&e.to_string());
                EnvFileCheck::Error {
                    message: e.to_string(),
                }
            }
        }
    }

    fn report_settings(ui: &mut dyn UserInterface, settings: &[SettingCheck], env_path: &Path) {
        let file_name = env_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| env_path.display().to_string());

        for setting in settings {
            match &setting.display {
                Some(value) => ui.success(&format!("{}: {}", setting.key, value)),
                None => ui.error(&format!("{} not found in {}", setting.key, file_name)),
            }
        }
    }

    fn run_probes(
        &self,
        ui: &mut dyn UserInterface,
        snapshot: &SettingsSnapshot,
    ) -> Vec<ProbeReport> {
        let prober = match HttpProber::with_timeout(self.args.timeout()) {
            Ok(prober) => Some(prober),
            Err(e) => {
                ui.error(&format!("Could not create HTTP client: {}", e));
                None
            }
        };

        let mut reports = Vec::with_capacity(2);

        ui.show_section("Checking connection to Supabase...");
        let auth = match &prober {
            Some(p) => probes::auth::probe(p, snapshot),
            None => ProbeReport::unavailable(ProbeTarget::Auth),
        };
        Self::report_auth(ui, &auth);
        reports.push(auth);

        ui.show_section("Checking connection to the Mercado Pago server...");
        let payments = match &prober {
            Some(p) => probes::payments::probe(p, snapshot),
            None => ProbeReport::unavailable(ProbeTarget::Payments),
        };
        Self::report_payments(ui, &payments);
        reports.push(payments);

        reports
    }

    fn report_auth(ui: &mut dyn UserInterface, report: &ProbeReport) {
        let target = report.target;
        match &report.outcome {
            ProbeOutcome::Reachable { status, .. } => {
                ui.success(&format!("Connected to {} ({})", target, status));
            }
            ProbeOutcome::HttpError { status } => {
                ui.error(&format!("Could not connect to {}: HTTP {}", target, status));
            }
            ProbeOutcome::ConnectionError { message } => {
                ui.error(&format!("Could not connect to {}: {}", target, message));
            }
            ProbeOutcome::Skipped { reason } => {
                ui.message(&format!("Skipped: {}", reason));
            }
        }
    }

    fn report_payments(ui: &mut dyn UserInterface, report: &ProbeReport) {
        let target = report.target;
        match &report.outcome {
            ProbeOutcome::Reachable {
                status,
                body_preview,
            } => {
                ui.success(&format!("Connected to {} ({})", target, status));
                ui.message(&format!(
                    "Response: {}...",
                    body_preview.as_deref().unwrap_or_default()
                ));
            }
            ProbeOutcome::HttpError { status } => {
                ui.error(&format!("Could not connect to {}: HTTP {}", target, status));
                Self::payments_hints(ui);
            }
            ProbeOutcome::ConnectionError { message } => {
                ui.error(&format!("Could not connect to {}: {}", target, message));
                Self::payments_hints(ui);
            }
            ProbeOutcome::Skipped { reason } => {
                ui.message(&format!("Skipped: {}", reason));
            }
        }
    }

    fn payments_hints(ui: &mut dyn UserInterface) {
        ui.warning(hints::payments_server_down());
        ui.warning(hints::check_payments_host());
    }

    fn show_instructions(&self, ui: &mut dyn UserInterface, snapshot: &SettingsSnapshot) {
        if !ui.output_mode().shows_guidance() {
            return;
        }

        let local_url = snapshot
            .get(SettingKey::PublicUrl)
            .unwrap_or(DEFAULT_LOCAL_URL);

        ui.show_section(hints::instructions_heading());
        ui.show_instruction(1, hints::stop_running_servers());
        ui.show_instruction(2, hints::run_dev_command());
        ui.show_command(&self.args.dev_command);
        ui.show_instruction(3, &hints::open_local_url(local_url));

        ui.show_section(hints::troubleshooting_heading());
        for tip in hints::troubleshooting_tips() {
            ui.show_hint(tip);
        }
    }
}
