use tecnicas_java_shared::content::sections;
use yew::prelude::*;

use crate::{
    components::{content_section::ContentSection, footer::Footer, hero::HeroSection},
    hooks::use_fragment_navigation,
};

#[function_component(HomePage)]
pub fn home_page() -> Html {
    use_fragment_navigation();

    html! {
        <main class="min-h-screen">
            <HeroSection />
            { for sections().iter().map(|section| html! {
                <ContentSection key={section.id} section={section} />
            }) }
            <Footer />
        </main>
    }
}
