use const_format::concatcp;

mod invitation;
pub use invitation::{InvitationState, name_from_query, DEFAULT_GREETING, GREETING_PREFIX, NAME_PARAM};

pub const PARTNER_ONE: &str = "Ramy";
pub const PARTNER_TWO: &str = "Moniroth";
pub const COUPLE_NAMES: &str = concatcp!(PARTNER_ONE, " & ", PARTNER_TWO);
pub const PAGE_TITLE: &str = concatcp!(COUPLE_NAMES, "'s Wedding");

pub const INVITED_LINE: &str = "You are cordially invited to celebrate";
pub const ANNOUNCEMENT_LINE: &str = "are getting married!";

pub const EVENT_DATE: &str = "Saturday, December 14th, 2024";
pub const EVENT_TIME: &str = "6:00 PM";
pub const VENUE_NAME: &str = "Vimean Piphup Thmei Sensok";
pub const VENUE_DETAIL: &str = "Building C";

pub const RSVP_DEADLINE: &str = "December 1st, 2024";
pub const RSVP_HEADING: &str = concatcp!("Please RSVP by ", RSVP_DEADLINE);
pub const RSVP_LABEL: &str = "RSVP Now";

pub const CLOSING_QUOTE: &str = "\u{201c}Love is not just looking at each other, it\u{2019}s looking in the same direction together.\u{201d}";
pub const CLOSING_LINE: &str = "We can\u{2019}t wait to celebrate with you!";

pub const HEART_ICON: &str = include_str!("../../assets/heart.svg");
pub const CALENDAR_ICON: &str = include_str!("../../assets/calendar.svg");
pub const LOCATION_ICON: &str = include_str!("../../assets/location.svg");

const BASE_STYLE: &str = r#"
* {
	--rose-50: #fff1f2;
	--rose-100: #ffe4e6;
	--rose-200: #fecdd3;
	--rose-400: #fb7185;
	--rose-500: #f43f5e;
	--rose-600: #e11d48;
	--rose-800: #9f1239;
	--pink-50: #fdf2f8;
	--pink-100: #fce7f3;
	--pink-400: #f472b6;
	--pink-500: #ec4899;
	--pink-600: #db2777;
	--gray-500: #6b7280;
	--gray-600: #4b5563;
	--gray-700: #374151;
	--gray-800: #1f2937;
	box-sizing: border-box;
}
body {
	margin: 0;
	font-family: ui-sans-serif, system-ui, sans-serif;
	color: var(--gray-800);
}
h1, h2, h3 {
	font-family: Georgia, Cambria, "Times New Roman", serif;
	font-weight: normal;
	margin: 0;
}
p {
	margin: 0;
}
"#;

/// Everything the invitation needs to look right. Both the server-rendered and the client-rendered
/// page use this, so they have to keep the same ids and classes.
pub const INVITATION_STYLE: &str = concatcp!(BASE_STYLE, r#"
#invitation-page {
	min-height: 100vh;
	background-image: linear-gradient(to bottom right, var(--rose-50), var(--pink-50), var(--rose-100));
	padding: 32px 16px;
}
#invitation-card {
	max-width: 672px;
	margin: 0 auto;
	background-color: white;
	border-radius: 8px;
	overflow: hidden;
	box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
}
.ribbon {
	height: 8px;
	background-image: linear-gradient(to right, var(--rose-400), var(--pink-400), var(--rose-500));
}
#card-content {
	padding: 32px;
	text-align: center;
}
#heart-badge {
	width: 64px;
	height: 64px;
	margin: 0 auto 24px auto;
	border-radius: 50%;
	display: flex;
	align-items: center;
	justify-content: center;
	color: white;
	background-image: linear-gradient(to bottom right, var(--rose-400), var(--pink-500));
}
.icon.heart {
	width: 32px;
	height: 32px;
}
#greeting-block {
	margin-bottom: 32px;
	padding: 16px;
	border-radius: 8px;
	border: 1px solid var(--rose-200);
	background-image: linear-gradient(to right, var(--rose-50), var(--pink-50));
}
#greeting {
	font-size: 24px;
	color: var(--rose-800);
	margin-bottom: 8px;
	overflow-wrap: anywhere;
}
#invited-line {
	font-size: 14px;
	color: var(--rose-600);
}
#couple {
	margin-bottom: 32px;
}
#couple h2 {
	font-size: 36px;
	margin-bottom: 16px;
}
.partner {
	display: block;
	color: var(--rose-600);
}
.ampersand {
	font-size: 24px;
	font-weight: 300;
	color: var(--gray-600);
}
#announcement-line {
	font-size: 20px;
	font-weight: 300;
	color: var(--gray-700);
}
#details {
	margin-bottom: 32px;
}
.detail {
	display: flex;
	align-items: center;
	justify-content: center;
	gap: 12px;
	margin-bottom: 16px;
}
.detail-icon {
	width: 24px;
	height: 24px;
	color: var(--rose-500);
}
.detail-main {
	font-size: 18px;
	font-weight: 600;
}
.detail-sub {
	color: var(--gray-600);
}
#rsvp {
	padding: 24px;
	border-radius: 8px;
	margin-bottom: 32px;
	background-image: linear-gradient(to right, var(--rose-100), var(--pink-100));
}
#rsvp h3 {
	font-size: 20px;
	color: var(--rose-800);
	margin-bottom: 16px;
}
#rsvp-button {
	color: white;
	border: none;
	border-radius: 9999px;
	padding: 12px 32px;
	font-size: 16px;
	font-weight: 600;
	cursor: pointer;
	background-image: linear-gradient(to right, var(--rose-500), var(--pink-500));
	transition: 0.3s;
}
#rsvp-button:hover {
	background-image: linear-gradient(to right, var(--rose-600), var(--pink-600));
	transform: scale(1.05);
}
#closing-quote {
	font-weight: 300;
	font-style: italic;
	color: var(--gray-600);
}
#closing-line {
	font-size: 14px;
	margin-top: 16px;
	color: var(--gray-500);
}
@media (min-width: 768px) {
	#card-content {
		padding: 48px;
	}
	#greeting {
		font-size: 30px;
	}
	#couple h2 {
		font-size: 48px;
	}
}
"#);

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn composed_strings() {
		assert_eq!(COUPLE_NAMES, "Ramy & Moniroth");
		assert_eq!(PAGE_TITLE, "Ramy & Moniroth's Wedding");
		assert_eq!(RSVP_HEADING, "Please RSVP by December 1st, 2024");
	}

	#[test]
	fn icons_are_inline_svg() {
		for icon in [HEART_ICON, CALENDAR_ICON, LOCATION_ICON] {
			assert!(icon.trim_start().starts_with("<svg"));
			assert!(icon.trim_end().ends_with("</svg>"));
		}
	}
}
