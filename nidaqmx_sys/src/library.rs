use std::ffi::OsStr;
use std::path::Path;

use crate::functions::DaqmxFns;

/// Environment variable overriding where the runtime is loaded from.
pub const LIBRARY_ENV: &str = "NIDAQMX_LIBRARY";

/// Names tried by [`Library::open_default`], in order.
#[cfg(windows)]
pub const DEFAULT_LIBRARY_NAMES: &[&str] = &["nicaiu.dll"];
#[cfg(target_os = "macos")]
pub const DEFAULT_LIBRARY_NAMES: &[&str] = &["/Library/Frameworks/nidaqmx.framework/nidaqmx"];
#[cfg(not(any(windows, target_os = "macos")))]
pub const DEFAULT_LIBRARY_NAMES: &[&str] = &["libnidaqmx.so", "libnidaqmx.so.1"];

/// The NI-DAQmx runtime together with its resolved function table.
///
/// The table borrows code from the loaded library, so the two are kept
/// together and unloaded together.
pub struct Library {
    fns: DaqmxFns,
    lib: Option<libloading::Library>,
}

impl Library {
    /// Loads the runtime at `path` and resolves every known function.
    pub fn open<P: AsRef<OsStr>>(path: P) -> Result<Self, libloading::Error> {
        // SAFETY: loading the vendor runtime runs its initializers, which is
        // the documented way to use it.
        let lib = unsafe { libloading::Library::new(path.as_ref())? };
        let fns = unsafe { DaqmxFns::load(&lib) };
        Ok(Self {
            fns,
            lib: Some(lib),
        })
    }

    /// Loads from `$NIDAQMX_LIBRARY` if set, otherwise tries the platform's
    /// install names. Returns the last loader error if nothing loads.
    pub fn open_default() -> Result<Self, libloading::Error> {
        if let Some(path) = std::env::var_os(LIBRARY_ENV) {
            return Self::open(path);
        }
        let (last, rest) = DEFAULT_LIBRARY_NAMES
            .split_last()
            .expect("at least one default library name");
        for name in rest {
            if let Ok(lib) = Self::open(Path::new(name)) {
                return Ok(lib);
            }
        }
        Self::open(Path::new(last))
    }

    /// Wraps a table that is not backed by a loaded library, for callers
    /// that link the runtime themselves or substitute their own functions.
    pub fn from_fns(fns: DaqmxFns) -> Self {
        Self { fns, lib: None }
    }

    pub fn fns(&self) -> &DaqmxFns {
        &self.fns
    }

    /// `true` when the table was resolved from a loaded runtime.
    pub fn is_loaded(&self) -> bool {
        self.lib.is_some()
    }
}

impl std::fmt::Debug for Library {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Library")
            .field("loaded", &self.is_loaded())
            .field("fns", &self.fns)
            .finish()
    }
}
