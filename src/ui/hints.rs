//! Instruction and troubleshooting text.
//!
//! Kept in one place so the terminal report and tests agree on wording.

/// Local URL shown when `PUBLIC_URL` is not set.
pub const DEFAULT_LOCAL_URL: &str = "http://localhost:5173";

/// Dev server command shown in the instructions.
pub const DEFAULT_DEV_COMMAND: &str = "npm run dev";

/// Heading above the numbered instructions.
pub fn instructions_heading() -> &'static str {
    "Instructions to start development:"
}

/// Step 1.
pub fn stop_running_servers() -> &'static str {
    "Stop any running server (Ctrl+C)"
}

/// Step 2, followed by the command itself.
pub fn run_dev_command() -> &'static str {
    "Run the following command:"
}

/// Step 3.
pub fn open_local_url(url: &str) -> String {
    format!("Once started, open {} in your browser", url)
}

/// Warning shown when the payments server probe fails.
pub fn payments_server_down() -> &'static str {
    "The Mercado Pago server on AWS may not be running"
}

/// Follow-up hint after [`payments_server_down`].
pub fn check_payments_host() -> &'static str {
    "Check that the server is running on its EC2 instance"
}

/// Heading above the troubleshooting tips.
pub fn troubleshooting_heading() -> &'static str {
    "If you keep having problems:"
}

/// General troubleshooting tips.
pub fn troubleshooting_tips() -> &'static [&'static str] {
    &[
        "- Check that the Mercado Pago server is running on AWS",
        "- Check that the Supabase credentials are correct",
        "- Make sure the required ports are open",
    ]
}
