use nix::sys::signal::{self, SaFlags, SigAction, SigHandler, SigSet, Signal};

// Written from the handler, which may only use async-signal-safe calls: no
// allocation, no locks, so the configured prompt string is out of reach and
// the default prompt is baked in.
const INTERRUPT_BANNER: &[u8] = b"\n$ ";

extern "C" fn on_sigint(_signum: libc::c_int) {
    unsafe {
        let _ = libc::write(
            libc::STDOUT_FILENO,
            INTERRUPT_BANNER.as_ptr().cast(),
            INTERRUPT_BANNER.len(),
        );
    }
}

/// Installs the SIGINT handler. An interrupt re-prints the prompt on a
/// fresh line and nothing else; in-progress dispatch is never redirected.
pub fn install_sigint_handler() -> nix::Result<()> {
    let action = SigAction::new(
        SigHandler::Handler(on_sigint),
        SaFlags::SA_RESTART,
        SigSet::empty(),
    );
    unsafe { signal::sigaction(Signal::SIGINT, &action) }.map(|_| ())
}
