pub mod handlers;
pub mod host;

// Re-export commonly used handler functions for convenience
pub use handlers::{
    OutputFormat, expand_path, load_settings, render_audit_list, render_classification,
    render_text_report,
};
pub use host::CliHost;
