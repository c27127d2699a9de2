//! Landing page assembly.

use leptos::prelude::*;

use crate::components::features::Features;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::components::pricing::Pricing;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <Navbar/>
            <main>
                <Hero/>
                <Features/>
                <Pricing/>
            </main>
            <Footer/>
        </div>
    }
}
