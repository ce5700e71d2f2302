use super::super::{Model, Msg};
use shared::Page;
use strum::IntoEnumIterator;
use yew::html::Scope;
use yew::prelude::*;

const LOGO_URL: &str = "https://cdn-icons-png.freepik.com/512/831/831896.png";

pub fn render_sidebar(current: Page, link: &Scope<Model>) -> Html {
    html! {
        <aside class="sidebar">
            <div class="sidebar-brand">
                <img src={LOGO_URL} alt="Banana" width="100" />
                <strong>{"Banana ML"}</strong>
            </div>

            <nav class="sidebar-nav">
                { for Page::iter().map(|page| html! {
                    <button
                        class={classes!("nav-button", (page == current).then_some("active"))}
                        onclick={link.callback(move |_| Msg::Navigate(page))}
                    >
                        { page.to_string() }
                    </button>
                })}
            </nav>

            <hr />
            <div class="alert alert-info">
                <p>{"Upload a banana image to check its ripeness and estimate days until rotten."}</p>
            </div>
        </aside>
    }
}
