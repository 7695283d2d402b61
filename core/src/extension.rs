//! # Extension Build Descriptor
//!
//! Describes how the native extension module wrapping the noise engine is
//! built: which sources, which include directories and which compiler flags.
//! The flags are the only part that depends on the host, and they are picked
//! from a fixed table keyed by [`Platform`].

use std::fmt;

/// Dotted module path of the compiled artifact inside its package.
pub const MODULE_NAME: &str = "qnoise._qnoise";
/// Binding layer source, relative to the package root.
pub const BINDING_SOURCE: &str = "qnoise/qNoisePy.cpp";
/// Native engine source, in the sibling native-source directory.
pub const CORE_SOURCE: &str = "../cpp/qNoise.cpp";
/// Native engine header directory.
pub const CORE_INCLUDE_DIR: &str = "../cpp";
pub const LANGUAGE: &str = "c++";

const UNIX_COMPILE_ARGS: &[&str] = &["-std=c++11", "-O3", "-Wall", "-fPIC"];
const WINDOWS_COMPILE_ARGS: &[&str] = &["/std:c++14", "/O2"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Windows,
    /// Every host that is not Windows.
    Unix,
}

impl Platform {
    /// Maps a platform identifier (`win32`, `linux`, `darwin`, ...) to a platform.
    ///
    /// Only `win32` and `windows` (any case) are Windows.
    pub fn from_identifier(id: &str) -> Self {
        match id.trim().to_ascii_lowercase().as_str() {
            "win32" | "windows" => Platform::Windows,
            _ => Platform::Unix,
        }
    }

    /// The platform this binary was built for.
    pub fn host() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }

    pub fn compile_args(self) -> &'static [&'static str] {
        match self {
            Platform::Windows => WINDOWS_COMPILE_ARGS,
            Platform::Unix => UNIX_COMPILE_ARGS,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Windows => f.write_str("windows"),
            Platform::Unix => f.write_str("unix"),
        }
    }
}

/// A directory searched for headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncludeDir {
    /// Headers of the binding helper library, located by the build tool.
    BindingHelper,
    Path(&'static str),
}

impl fmt::Display for IncludeDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IncludeDir::BindingHelper => f.write_str("<binding-helper>"),
            IncludeDir::Path(path) => f.write_str(path),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionDescriptor {
    pub module: &'static str,
    pub sources: [&'static str; 2],
    pub include_dirs: [IncludeDir; 2],
    pub language: &'static str,
    pub platform: Platform,
    pub extra_compile_args: &'static [&'static str],
}

impl ExtensionDescriptor {
    pub fn for_platform(platform: Platform) -> Self {
        Self {
            module: MODULE_NAME,
            sources: [BINDING_SOURCE, CORE_SOURCE],
            include_dirs: [IncludeDir::BindingHelper, IncludeDir::Path(CORE_INCLUDE_DIR)],
            language: LANGUAGE,
            platform,
            extra_compile_args: platform.compile_args(),
        }
    }

    pub fn for_host() -> Self {
        Self::for_platform(Platform::host())
    }

    /// Package part of the module path (`qnoise` for `qnoise._qnoise`).
    pub fn package(&self) -> &'static str {
        self.module.rsplit_once('.').map_or(self.module, |(package, _)| package)
    }

    /// Manifest text, one `key = value` line per field.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ExtensionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[extension]")?;
        writeln!(f, "module = {:?}", self.module)?;
        writeln!(f, "language = {:?}", self.language)?;
        writeln!(f, "platform = \"{}\"", self.platform)?;
        writeln!(f, "sources = {}", quoted_list(self.sources.iter()))?;
        writeln!(f, "include_dirs = {}", quoted_list(self.include_dirs.iter()))?;
        writeln!(f, "extra_compile_args = {}", quoted_list(self.extra_compile_args.iter()))
    }
}

fn quoted_list<T: fmt::Display>(items: impl Iterator<Item = T>) -> String {
    let quoted: Vec<String> = items.map(|item| format!("\"{item}\"")).collect();
    format!("[{}]", quoted.join(", "))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
