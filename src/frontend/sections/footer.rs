use crate::content::FOOTER_CREDIT;
use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <footer class="border-t border-gray-200 bg-white py-8 text-center text-sm text-gray-500 dark:border-gray-800 dark:bg-gray-900 dark:text-gray-400">
            {format!("© {year} {FOOTER_CREDIT}")}
        </footer>
    }
}
