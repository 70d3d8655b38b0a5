use yew::prelude::*;
use shared_data::{
	InvitationState,
	ANNOUNCEMENT_LINE,
	CALENDAR_ICON,
	CLOSING_LINE,
	CLOSING_QUOTE,
	EVENT_DATE,
	EVENT_TIME,
	HEART_ICON,
	INVITED_LINE,
	LOCATION_ICON,
	PARTNER_ONE,
	PARTNER_TWO,
	RSVP_HEADING,
	RSVP_LABEL,
	VENUE_DETAIL,
	VENUE_NAME
};
use crate::style::InvitationStyle;

// The query string of the page we're on, or an empty one if the browser won't tell us
fn location_search() -> String {
	let Some(window) = web_sys::window() else {
		gloo_console::error!("No window to read the invitee's name from");
		return String::new();
	};

	window.location()
		.search()
		.unwrap_or_else(|err| {
			gloo_console::error!("Couldn't read the page's query string:", err);
			String::new()
		})
}

fn raw_svg(svg: &'static str) -> Html {
	Html::from_html_unchecked(svg.into())
}

#[function_component(InvitationPage)]
pub fn invitation_page() -> Html {
	let state = use_state(InvitationState::default);

	// Only once, after the first render. Empty deps mean this never re-runs on later renders.
	{
		let state = state.clone();
		use_effect_with((), move |_| {
			let personalized = (*state).clone().personalize(&location_search());
			if personalized.is_personalized() {
				state.set(personalized);
			}

			|| ()
		});
	}

	html! {
		<>
			<InvitationStyle />
			<div id="invitation-page">
				<div id="invitation-card">
					<div class="ribbon"></div>
					<div id="card-content">
						<div id="heart-badge">{ raw_svg(HEART_ICON) }</div>
						<div id="greeting-block">
							<h1 id="greeting">{ state.invitee_name().into_owned() }</h1>
							<p id="invited-line">{ INVITED_LINE }</p>
						</div>
						<div id="couple">
							<h2>
								<span class="partner">{ PARTNER_ONE }</span>
								<span class="ampersand">{ "&" }</span>
								<span class="partner">{ PARTNER_TWO }</span>
							</h2>
							<p id="announcement-line">{ ANNOUNCEMENT_LINE }</p>
						</div>
						<div id="details">
							<div class="detail">
								{ raw_svg(CALENDAR_ICON) }
								<div>
									<p class="detail-main">{ EVENT_DATE }</p>
									<p class="detail-sub">{ EVENT_TIME }</p>
								</div>
							</div>
							<div class="detail">
								{ raw_svg(LOCATION_ICON) }
								<div>
									<p class="detail-main">{ VENUE_NAME }</p>
									<p class="detail-sub">{ VENUE_DETAIL }</p>
								</div>
							</div>
						</div>
						<div id="rsvp">
							<h3>{ RSVP_HEADING }</h3>
							// no onclick on purpose, this just has to look clickable
							<button type="button" id="rsvp-button">{ RSVP_LABEL }</button>
						</div>
						<div id="closing">
							<p id="closing-quote">{ CLOSING_QUOTE }</p>
							<p id="closing-line">{ CLOSING_LINE }</p>
						</div>
					</div>
					<div class="ribbon"></div>
				</div>
			</div>
		</>
	}
}
