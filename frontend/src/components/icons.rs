use yew::prelude::*;

/// 线性 icon 集合，SVG 路径与 Heroicons outline 一致
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IconName {
    Copy,
    Check,
    Document,
    ExternalLink,
}

impl IconName {
    pub fn path(&self) -> &'static str {
        match self {
            IconName::Copy => {
                "M8 16H6a2 2 0 01-2-2V6a2 2 0 012-2h8a2 2 0 012 2v2m-6 12h8a2 2 0 002-2v-8a2 2 0 \
                 00-2-2h-8a2 2 0 00-2 2v8a2 2 0 002 2z"
            },
            IconName::Check => "M5 13l4 4L19 7",
            IconName::Document => {
                "M9 12h6m-6 4h6m2 5H7a2 2 0 01-2-2V5a2 2 0 012-2h5.586a1 1 0 01.707.293l5.414 \
                 5.414a1 1 0 01.293.707V19a2 2 0 01-2 2z"
            },
            IconName::ExternalLink => "M10 6H6a2 2 0 00-2 2v10a2 2 0 002 2h10a2 2 0 002-2v-4M14 4h6m0 0v6m0-6L10 14",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub name: IconName,

    #[prop_or(24)]
    pub size: u32,

    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    let IconProps {
        name,
        size,
        class,
    } = props;

    html! {
        <svg
            class={classes!("shrink-0", "transition-all", "duration-300", class.clone())}
            width={size.to_string()}
            height={size.to_string()}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            xmlns="http://www.w3.org/2000/svg"
            aria-hidden="true"
        >
            <path d={name.path()} />
        </svg>
    }
}
