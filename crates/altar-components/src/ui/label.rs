//! Label

container! {
	/// Form label
	Label: "label", slot = "label",
	class = "flex gap-2 items-center font-medium text-sm select-none leading-none group-data-[disabled=true]:pointer-events-none group-data-[disabled=true]:opacity-50 peer-disabled:cursor-not-allowed peer-disabled:opacity-50",
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::component::{WithChildren, WithProps};
	use altar_core::page::IntoPage;
	use rstest::rstest;

	#[rstest]
	fn test_label() {
		let html = Label::new()
			.attr("for", "email")
			.child("Email")
			.into_page()
			.render_to_string();
		assert!(html.starts_with("<label data-slot=\"label\" class=\"flex gap-2"));
		assert!(html.contains("for=\"email\""));
		assert!(html.ends_with(">Email</label>"));
	}
}
