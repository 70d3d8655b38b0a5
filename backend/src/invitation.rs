use axum::{extract::RawQuery, http::StatusCode, response::Html};
use horrorshow::{html, helper::doctype, Raw, RenderOnce, Template, TemplateBuffer};
use shared_data::{
	InvitationState,
	ANNOUNCEMENT_LINE,
	CALENDAR_ICON,
	CLOSING_LINE,
	CLOSING_QUOTE,
	EVENT_DATE,
	EVENT_TIME,
	HEART_ICON,
	INVITATION_STYLE,
	INVITED_LINE,
	LOCATION_ICON,
	PAGE_TITLE,
	PARTNER_ONE,
	PARTNER_TWO,
	RSVP_HEADING,
	RSVP_LABEL,
	VENUE_DETAIL,
	VENUE_NAME
};

pub async fn get_invitation(
	RawQuery(query): RawQuery
) -> Result<Html<String>, (StatusCode, &'static str)> {
	render_invitation(InvitationState::from_query(query.as_deref().unwrap_or_default()))
}

pub fn render_invitation(state: InvitationState) -> Result<Html<String>, (StatusCode, &'static str)> {
	InvitationPage { state }
		.into_string()
		.map(Html)
		.map_err(|e| {
			tracing::error!("Couldn't render invitation page: {e:?}");
			(StatusCode::INTERNAL_SERVER_ERROR, "Couldn't render the invitation")
		})
}

pub struct InvitationPage {
	pub state: InvitationState
}

impl RenderOnce for InvitationPage {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		let greeting = self.state.invitee_name().into_owned();

		tmpl << html! {
			: doctype::HTML;
			html(lang = "en") {
				head {
					meta(charset = "utf-8");
					meta(name = "viewport", content = "width=device-width, initial-scale=1");
					title : PAGE_TITLE;
					style : Raw(INVITATION_STYLE);
				}
				body {
					div(id = "invitation-page") {
						div(id = "invitation-card") {
							div(class = "ribbon") {}
							div(id = "card-content") {
								div(id = "heart-badge") : Raw(HEART_ICON);
								div(id = "greeting-block") {
									h1(id = "greeting") : greeting;
									p(id = "invited-line") : INVITED_LINE;
								}
								div(id = "couple") {
									h2 {
										span(class = "partner") : PARTNER_ONE;
										span(class = "ampersand") : "&";
										span(class = "partner") : PARTNER_TWO;
									}
									p(id = "announcement-line") : ANNOUNCEMENT_LINE;
								}
								div(id = "details") {
									div(class = "detail") {
										: Raw(CALENDAR_ICON);
										div {
											p(class = "detail-main") : EVENT_DATE;
											p(class = "detail-sub") : EVENT_TIME;
										}
									}
									div(class = "detail") {
										: Raw(LOCATION_ICON);
										div {
											p(class = "detail-main") : VENUE_NAME;
											p(class = "detail-sub") : VENUE_DETAIL;
										}
									}
								}
								div(id = "rsvp") {
									h3 : RSVP_HEADING;
									// purely decorative, there's nothing to submit to
									button(type = "button", id = "rsvp-button") : RSVP_LABEL;
								}
								div(id = "closing") {
									p(id = "closing-quote") : CLOSING_QUOTE;
									p(id = "closing-line") : CLOSING_LINE;
								}
							}
							div(class = "ribbon") {}
						}
					}
				}
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn render(query: &str) -> String {
		render_invitation(InvitationState::from_query(query))
			.map(|Html(page)| page)
			.unwrap()
	}

	#[test]
	fn default_greeting() {
		assert!(render("").contains(r#"<h1 id="greeting">Dear Guest</h1>"#));
		assert!(render("?name=").contains(r#"<h1 id="greeting">Dear Guest</h1>"#));
		assert!(render("?ref=invite").contains(r#"<h1 id="greeting">Dear Guest</h1>"#));
	}

	#[test]
	fn personalized_greeting() {
		assert!(render("?name=Sophea").contains(r#"<h1 id="greeting">Dear Sophea</h1>"#));
	}

	#[test]
	fn greeting_is_escaped_text() {
		let page = render("?name=%3Cscript%3Ealert(1)%3C%2Fscript%3E");
		assert!(page.contains("Dear &lt;script&gt;alert(1)&lt;/script&gt;"));
		assert!(!page.contains("<script>"));
	}

	#[test]
	fn static_details_are_shown() {
		let page = render("");
		for text in [
			"Ramy",
			"Moniroth",
			"are getting married!",
			"Saturday, December 14th, 2024",
			"6:00 PM",
			"Vimean Piphup Thmei Sensok",
			"Building C",
			"Please RSVP by December 1st, 2024",
			"You are cordially invited to celebrate",
		] {
			assert!(page.contains(text), "missing {text:?}");
		}
		assert!(page.starts_with("<!DOCTYPE html>"));
		assert!(page.contains("<title>Ramy &amp; Moniroth"));
	}

	#[test]
	fn only_the_greeting_changes() {
		let default = render("");
		let named = render("?name=Sophea&ref=invite");
		assert_ne!(default, named);
		assert_eq!(named.replace("Dear Sophea", "Dear Guest"), default);
	}

	#[test]
	fn rsvp_button_does_nothing() {
		let page = render("?name=Sophea");
		assert!(page.contains(r#"<button type="button" id="rsvp-button">RSVP Now</button>"#));
		assert!(!page.contains("<form"));
		assert!(!page.contains("<a "));
		assert!(!page.contains("onclick"));
	}
}
