use std::borrow::Cow;

/// What the greeting says when we don't know who's reading
pub const DEFAULT_GREETING: &str = "Dear Guest";
pub const GREETING_PREFIX: &str = "Dear ";
/// The only query parameter the page cares about
pub const NAME_PARAM: &str = "name";

/// The greeting state of an invitation page. It starts out as `Default` and can move to
/// `Personalized` exactly once, when a non-empty `name` shows up in the query string. There's no
/// way back.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum InvitationState {
	#[default]
	Default,
	Personalized(String)
}

impl InvitationState {
	#[must_use]
	pub fn from_query(query: &str) -> Self {
		Self::default().personalize(query)
	}

	/// Looks up `name` in `query` and moves to `Personalized` if it's there. Calling this on a
	/// state that's already personalized does nothing.
	#[must_use]
	pub fn personalize(self, query: &str) -> Self {
		match self {
			Self::Default => name_from_query(query)
				.map_or(Self::Default, Self::Personalized),
			personalized @ Self::Personalized(_) => personalized
		}
	}

	#[must_use]
	pub fn is_personalized(&self) -> bool {
		matches!(self, Self::Personalized(_))
	}

	/// The text that goes in the greeting heading. Never empty.
	#[must_use]
	pub fn invitee_name(&self) -> Cow<'static, str> {
		match self {
			Self::Default => DEFAULT_GREETING.into(),
			Self::Personalized(name) => format!("{GREETING_PREFIX}{name}").into()
		}
	}
}

/// Pulls the first `name` value out of a query string (with or without the leading `?`), the same
/// way `URLSearchParams.get` would. An empty first value counts as no value at all, even if
/// there's a later non-empty one.
#[must_use]
pub fn name_from_query(query: &str) -> Option<String> {
	let query = query.strip_prefix('?').unwrap_or(query);

	serde_urlencoded::from_str::<Vec<(String, String)>>(query)
		.ok()?
		.into_iter()
		.find(|(key, _)| key == NAME_PARAM)
		.map(|(_, value)| value)
		.filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn greeting(query: &str) -> String {
		InvitationState::from_query(query).invitee_name().into_owned()
	}

	#[test]
	fn no_query_uses_default() {
		assert_eq!(greeting(""), "Dear Guest");
		assert_eq!(greeting("?"), "Dear Guest");
		assert_eq!(InvitationState::default().invitee_name(), DEFAULT_GREETING);
	}

	#[test]
	fn name_is_prefixed() {
		assert_eq!(greeting("?name=Sophea"), "Dear Sophea");
		assert_eq!(greeting("name=Sophea"), "Dear Sophea");
	}

	#[test]
	fn empty_name_uses_default() {
		assert_eq!(greeting("?name="), "Dear Guest");
		assert_eq!(greeting("?name"), "Dear Guest");
	}

	#[test]
	fn unrelated_params_are_ignored() {
		assert_eq!(greeting("?ref=invite"), "Dear Guest");
		assert_eq!(greeting("?ref=invite&name=Dara&lang=km"), "Dear Dara");
		// keys are case sensitive
		assert_eq!(greeting("?Name=Dara"), "Dear Guest");
	}

	#[test]
	fn only_the_first_name_counts() {
		assert_eq!(greeting("?name=Ana&name=Bob"), "Dear Ana");
		assert_eq!(greeting("?name=&name=Bob"), "Dear Guest");
	}

	#[test]
	fn values_are_decoded_but_otherwise_verbatim() {
		assert_eq!(greeting("?name=Jean+Luc"), "Dear Jean Luc");
		assert_eq!(greeting("?name=%20%20spaced%20"), "Dear   spaced ");
		assert_eq!(greeting("?name=%3Cb%3Ehi%3C%2Fb%3E"), "Dear <b>hi</b>");
		assert_eq!(greeting("?name=%E1%9E%85%E1%9E%93%E1%9F%92%E1%9E%91"), "Dear ចន្ទ");
		assert_eq!(greeting("?name=mIxEd"), "Dear mIxEd");
	}

	#[test]
	fn personalizing_happens_at_most_once() {
		let state = InvitationState::from_query("?name=Sophea");
		assert!(state.is_personalized());

		let again = state.clone().personalize("?name=Someone+Else");
		assert_eq!(again, state);
		assert_eq!(again.invitee_name(), "Dear Sophea");
	}

	#[test]
	fn default_stays_default_without_a_name() {
		let state = InvitationState::default().personalize("?ref=invite");
		assert_eq!(state, InvitationState::Default);
		assert!(!state.is_personalized());
	}

	#[test]
	fn greeting_is_never_empty() {
		for query in ["", "?", "?name=", "?name=x", "&&&", "?=", "?name=%"] {
			assert!(!greeting(query).is_empty(), "empty greeting for {query:?}");
		}
	}
}
