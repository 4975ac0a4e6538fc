use std::io::Write;

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("notification failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Feedback emitted after every successful reply (sound, vibration...).
///
/// Best effort: the chat ignores any error returned here.
pub trait Notifier: Send + Sync {
    fn notify(&self) -> Result<(), NotifyError>;
}

/// Rings the terminal bell
#[derive(Debug, Default)]
pub struct TerminalBell;

impl Notifier for TerminalBell {
    fn notify(&self) -> Result<(), NotifyError> {
        let mut stdout = std::io::stdout();
        stdout.write_all(b"\x07")?;
        stdout.flush()?;
        Ok(())
    }
}

#[cfg(test)]
#[derive(Debug, Default)]
pub struct NoopNotifier;

#[cfg(test)]
impl Notifier for NoopNotifier {
    fn notify(&self) -> Result<(), NotifyError> {
        Ok(())
    }
}
