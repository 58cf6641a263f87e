//! Terminal feedback and clipboard plumbing for the passforge binary.
//!
//! Clipboard support is compiled in only with the `clipboard` cargo
//! feature; without it the copy entry points return a descriptive error
//! and callers degrade to printed output.

use std::thread;
use std::time::Duration;

use console::{style, Term};
use passforge::error::{PassForgeError, PfResult};

/// How long the transient "copied" acknowledgment stays visible.
pub const COPY_ACK_MILLIS: u64 = 1500;

/// Seconds before an auto-clearing copy wipes the clipboard.
pub const CLIPBOARD_CLEAR_SECS: u64 = 10;

#[cfg(feature = "clipboard")]
pub fn copy_to_clipboard(text: &str) -> PfResult<()> {
    use clipboard::{ClipboardContext, ClipboardProvider};

    let mut ctx: ClipboardContext = ClipboardProvider::new()
        .map_err(|e| PassForgeError::Clipboard(format!("init failed: {}", e)))?;

    ctx.set_contents(text.to_string())
        .map_err(|e| PassForgeError::Clipboard(format!("write failed: {}", e)))?;

    Ok(())
}

#[cfg(not(feature = "clipboard"))]
pub fn copy_to_clipboard(_text: &str) -> PfResult<()> {
    Err(PassForgeError::Clipboard(
        "built without clipboard support; rebuild with --features clipboard".to_string(),
    ))
}

/// Copies `text` and schedules a background wipe. The wipe only fires if
/// the clipboard still holds `text`, so a later copy survives it. Meant
/// for long-lived shells; the spawned thread dies with the process.
pub fn copy_with_auto_clear(text: &str) -> PfResult<()> {
    copy_to_clipboard(text)?;

    #[cfg(feature = "clipboard")]
    {
        use clipboard::{ClipboardContext, ClipboardProvider};

        let expected = text.to_string();
        thread::spawn(move || {
            thread::sleep(Duration::from_secs(CLIPBOARD_CLEAR_SECS));

            let ctx_result: Result<ClipboardContext, _> = ClipboardProvider::new();
            if let Ok(mut ctx) = ctx_result {
                let current: Result<String, _> = ctx.get_contents();
                if current.ok().as_deref() == Some(&expected) {
                    let _ = ctx.set_contents(String::new());
                }
            }
        });
    }

    Ok(())
}

/// Prints the transient acknowledgment, waits, then erases it.
pub fn flash_copied_ack(term: &Term) {
    let line = format!(
        "{} (clipboard clears in {}s)",
        style("✓ Copied to clipboard").green().bold(),
        CLIPBOARD_CLEAR_SECS
    );
    let _ = term.write_line(&line);
    thread::sleep(Duration::from_millis(COPY_ACK_MILLIS));
    let _ = term.clear_last_lines(1);
}
