// Windows 10 adapters for `ColorSource`. Nothing here is needed on other
// platforms; the resolver and color math stay portable.

mod adapter;
mod registry;

pub use adapter::WindowsColorSource;

use tracing::debug;
use windows::Win32::System::Com::{CoInitializeEx, COINIT_APARTMENTTHREADED};

/// Initialize COM for the calling thread, as WinRT activation requires.
pub fn init_com() {
    let hr = unsafe { CoInitializeEx(None, COINIT_APARTMENTTHREADED) };
    if let Err(err) = hr.ok() {
        debug!("CoInitializeEx failed: {err}");
    }
}
