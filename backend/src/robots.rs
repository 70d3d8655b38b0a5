pub const ROBOTS_TXT: &str = "User-agent: *\nAllow: /\n";

#[allow(clippy::unused_async)]
pub async fn get_robots_txt() -> &'static str {
	ROBOTS_TXT
}
