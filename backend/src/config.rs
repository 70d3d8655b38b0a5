use std::{
	net::{IpAddr, Ipv4Addr, SocketAddr},
	path::{Path, PathBuf}
};

pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
	pub addr: SocketAddr,
	/// Where the built client bundle lives, if we're serving it at all
	pub frontend_dir: Option<PathBuf>
}

impl Default for Config {
	fn default() -> Self {
		Self {
			addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), DEFAULT_PORT),
			frontend_dir: None
		}
	}
}

impl Config {
	/// Reads `BACKEND_HOST`, `BACKEND_PORT` and `FRONTEND_DIR` from the environment (and `.env`)
	#[must_use]
	pub fn from_env() -> Self {
		Self::from_lookup(|key| dotenv::var(key).ok())
	}

	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
		macro_rules! env_or{
			($key:expr, $default:expr) => {
				lookup($key)
					.and_then(|v| v.trim().parse().ok())
					.unwrap_or($default)
			}
		}

		let defaults = Self::default();
		let host = env_or!("BACKEND_HOST", defaults.addr.ip());
		let port = env_or!("BACKEND_PORT", defaults.addr.port());

		let frontend_dir = lookup("FRONTEND_DIR")
			.and_then(|d| (!d.is_empty()).then_some(d))
			.map(PathBuf::from);

		Self {
			addr: SocketAddr::new(host, port),
			frontend_dir
		}
	}
}

/// Makes sure `dir` is something we can actually serve files out of
pub fn check_frontend_dir(dir: &Path) -> Result<(), String> {
	match std::fs::metadata(dir) {
		Ok(mtd) if mtd.is_dir() => std::fs::read_dir(dir)
			.map(|_| ())
			.map_err(|e| format!("FRONTEND_DIR ({}) can't be read: {e}", dir.display())),
		Ok(_) => Err(format!("FRONTEND_DIR ({}) is not a directory", dir.display())),
		Err(e) => Err(format!("FRONTEND_DIR ({}) does not point to a valid directory: {e}", dir.display()))
	}
}
