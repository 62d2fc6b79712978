use tecnicas_java_shared::Section;
use yew::prelude::*;

use crate::components::code_block::CodeBlock;

#[derive(Properties, PartialEq)]
pub struct ContentSectionProps {
    pub section: &'static Section,
}

/// One lesson. The element id is the section id, which is what navigation
/// looks up.
#[function_component(ContentSection)]
pub fn content_section(props: &ContentSectionProps) -> Html {
    let section = props.section;

    html! {
        <section
            id={section.id}
            class={classes!(
                "max-w-7xl",
                "mx-auto",
                "px-4",
                "py-16",
                "sm:px-6",
                "lg:px-8",
                "border-t",
                "border-border"
            )}
        >
            <div class="space-y-8">
                <div>
                    <h2 class={classes!(
                        "text-4xl",
                        "font-bold",
                        "mb-4",
                        "glow-text",
                        format!("text-{}", section.color.as_str())
                    )}>
                        { section.title }
                    </h2>
                    <p class={classes!("text-lg", "text-muted-foreground", "leading-relaxed")}>
                        { section.description }
                    </p>
                </div>

                { for section.examples.iter().enumerate().map(|(index, example)| html! {
                    <div key={index} class="space-y-4">
                        <h3 class={classes!("text-2xl", "font-semibold", "text-foreground")}>
                            { example.title }
                        </h3>
                        <CodeBlock code={example.code} />
                    </div>
                }) }
            </div>
        </section>
    }
}
