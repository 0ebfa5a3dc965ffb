pub(crate) mod util;

mod components;
mod pages;

mod canvas_context;
pub use canvas_context::*;

mod gesture;
pub use gesture::*;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="light"/>

		<Title formatter=|page| format!("Scrawl - {page}")/>

		// Inject metadata in the <head> tag.
		<Meta charset="UTF-8"/>
		<Meta name="viewport" content="width=device-width, initial-scale=1.0"/>

		<Router>
			<Routes fallback=pages::NotFound>
				<Route path=path!("/") view=pages::Home/>
			</Routes>
		</Router>
	}
}
