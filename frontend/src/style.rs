use yew::prelude::*;

#[function_component(InvitationStyle)]
pub fn invitation_style() -> Html {
	html! { <style>{ shared_data::INVITATION_STYLE }</style> }
}
