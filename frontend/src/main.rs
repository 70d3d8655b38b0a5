use yew::prelude::*;
use invitation::InvitationPage;

mod invitation;
mod style;

#[function_component(Frontend)]
pub fn frontend() -> Html {
	html! { <InvitationPage /> }
}

fn main() {
	yew::Renderer::<Frontend>::new().render();
}
