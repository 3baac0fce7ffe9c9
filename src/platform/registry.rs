// DWORD reads from the registry, for the undocumented DWM and theme values.

use windows::core::PCWSTR;
use windows::Win32::Foundation::{ERROR_FILE_NOT_FOUND, ERROR_PATH_NOT_FOUND, WIN32_ERROR};
use windows::Win32::System::Registry::{
    RegCloseKey, RegOpenKeyExW, RegQueryValueExW, HKEY, HKEY_CURRENT_USER, HKEY_LOCAL_MACHINE,
    KEY_READ, REG_DWORD, REG_VALUE_TYPE,
};

use crate::error::{ColorError, Result};

pub const DWM_KEY: &str = "SOFTWARE\\Microsoft\\Windows\\DWM";
pub const PERSONALIZE_KEY: &str = "SOFTWARE\\Microsoft\\Windows\\CurrentVersion\\Themes\\Personalize";
pub const CURRENT_VERSION_KEY: &str = "SOFTWARE\\Microsoft\\Windows NT\\CurrentVersion";

#[derive(Debug, Clone, Copy)]
pub enum Hive {
    CurrentUser,
    LocalMachine,
}

impl Hive {
    fn root(self) -> HKEY {
        match self {
            Hive::CurrentUser => HKEY_CURRENT_USER,
            Hive::LocalMachine => HKEY_LOCAL_MACHINE,
        }
    }
}

fn wide_string(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}

fn to_color_error(what: &'static str, result: WIN32_ERROR) -> ColorError {
    if result == ERROR_FILE_NOT_FOUND || result == ERROR_PATH_NOT_FOUND {
        ColorError::Unavailable(what)
    } else {
        ColorError::QueryFailed {
            what,
            code: result.0,
        }
    }
}

/// Closes the key when dropped.
struct OpenKey(HKEY);

impl OpenKey {
    fn open(hive: Hive, path: &str, what: &'static str) -> Result<Self> {
        let key_path = wide_string(path);
        let mut hkey = HKEY::default();
        let result = unsafe {
            RegOpenKeyExW(
                hive.root(),
                PCWSTR(key_path.as_ptr()),
                Some(0),
                KEY_READ,
                &mut hkey,
            )
        };
        if result.is_ok() {
            Ok(OpenKey(hkey))
        } else {
            Err(to_color_error(what, result))
        }
    }
}

impl Drop for OpenKey {
    fn drop(&mut self) {
        unsafe {
            let _ = RegCloseKey(self.0);
        }
    }
}

/// Read a `REG_DWORD` value. A missing key or value is `Unavailable`.
pub fn query_dword(hive: Hive, path: &str, name: &'static str) -> Result<u32> {
    let key = OpenKey::open(hive, path, name)?;
    let value_name = wide_string(name);
    let mut kind = REG_VALUE_TYPE::default();
    let mut data: u32 = 0;
    let mut size = std::mem::size_of::<u32>() as u32;

    let result = unsafe {
        RegQueryValueExW(
            key.0,
            PCWSTR(value_name.as_ptr()),
            None,
            Some(&mut kind as *mut REG_VALUE_TYPE),
            Some(&mut data as *mut u32 as *mut u8),
            Some(&mut size as *mut u32),
        )
    };
    if result.is_err() {
        return Err(to_color_error(name, result));
    }
    if kind != REG_DWORD {
        return Err(ColorError::QueryFailed {
            what: name,
            code: kind.0,
        });
    }
    Ok(data)
}

/// Read a DWORD flag, nonzero meaning true.
pub fn query_flag(hive: Hive, path: &str, name: &'static str) -> Result<bool> {
    query_dword(hive, path, name).map(|v| v != 0)
}
