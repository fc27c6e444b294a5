use std::io;

use super::Console;

/// RAII guard that restores a [`Console`] at the end of a colorized line.
///
/// While the guard is alive, callers write through it (it implements
/// [`Deref`](std::ops::Deref) and [`DerefMut`](std::ops::DerefMut) to the
/// console) and may change colors freely. When the guard is dropped the console
/// colors are reset to the console's defaults, not to the colors in effect
/// when the guard was created, and the current line is terminated. This holds
/// even when the caller bailed out early with `?` or unwound from a panic.
/// Failures during that implicit cleanup are discarded; call
/// [`finish`](Self::finish) on the success path to observe them.
#[must_use = "dropping the guard immediately resets colors and ends the line"]
pub struct ColorGuard<'a, C>
where
    C: Console + ?Sized,
{
    console: Option<&'a mut C>,
}

impl<'a, C> ColorGuard<'a, C>
where
    C: Console + ?Sized,
{
    /// Starts a colorized line on `console`.
    pub fn new(console: &'a mut C) -> Self {
        Self {
            console: Some(console),
        }
    }

    /// Resets colors and terminates the line, reporting the first failure.
    ///
    /// The line terminator is attempted even when resetting colors fails.
    pub fn finish(mut self) -> io::Result<()> {
        match self.console.take() {
            Some(console) => restore(console),
            None => Ok(()),
        }
    }
}

fn restore<C>(console: &mut C) -> io::Result<()>
where
    C: Console + ?Sized,
{
    let reset = console.reset_color();
    let newline = console.write_line();
    reset.and(newline)
}

impl<C> Drop for ColorGuard<'_, C>
where
    C: Console + ?Sized,
{
    fn drop(&mut self) {
        if let Some(console) = self.console.take() {
            let _ = restore(console);
        }
    }
}

impl<C> std::ops::Deref for ColorGuard<'_, C>
where
    C: Console + ?Sized,
{
    type Target = C;

    fn deref(&self) -> &Self::Target {
        self.console
            .as_deref()
            .expect("color guard remains active while borrowed")
    }
}

impl<C> std::ops::DerefMut for ColorGuard<'_, C>
where
    C: Console + ?Sized,
{
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.console
            .as_deref_mut()
            .expect("color guard remains active while borrowed")
    }
}
