//! Site footer for the marketing pages.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__inner">
                <div class="footer__brand">
                    <span class="footer__logo">"Lumina"</span>
                    <p class="footer__tagline">"Reference-guided image generation for everyone."</p>
                </div>
                <div class="footer__columns">
                    <div class="footer__column">
                        <span class="footer__heading">"Product"</span>
                        <a href="/#features" class="footer__link">"Features"</a>
                        <a href="/#pricing" class="footer__link">"Pricing"</a>
                        <a href="/waitlist" class="footer__link">"Waitlist"</a>
                    </div>
                    <div class="footer__column">
                        <span class="footer__heading">"Studio"</span>
                        <a href="/dashboard" class="footer__link">"Dashboard"</a>
                        <a href="/generation" class="footer__link">"New creation"</a>
                    </div>
                    <div class="footer__column">
                        <span class="footer__heading">"Account"</span>
                        <a href="/auth/login" class="footer__link">"Sign in"</a>
                        <a href="/auth/signup" class="footer__link">"Create account"</a>
                    </div>
                </div>
            </div>
            <div class="footer__bottom">
                <span>"© 2025 Lumina. All rights reserved."</span>
            </div>
        </footer>
    }
}
