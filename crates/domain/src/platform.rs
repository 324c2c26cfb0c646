use std::fmt;

/// Operating system family, keyed on the runtime OS identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Platform {
    Linux,
    Windows,
    MacOs,
    Other(String),
}

impl Platform {
    /// The platform this process is running on.
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// Accepts Rust (`macos`) as well as Node-style (`darwin`, `win32`) names.
    pub fn from_os(os: &str) -> Self {
        let os = os.trim().to_ascii_lowercase();
        match os.as_str() {
            "linux" => Platform::Linux,
            "windows" | "win32" | "win64" => Platform::Windows,
            "macos" | "darwin" => Platform::MacOs,
            _ => Platform::Other(os),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Platform::Linux => "linux",
            Platform::Windows => "windows",
            Platform::MacOs => "macos",
            Platform::Other(name) => name,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
