use std::rc::Rc;

use log::{error, info};
use yew::prelude::*;

mod config;
mod motion;
mod rotation;
mod testimonials;
mod components {
    pub mod counter;
    pub mod reveal;
}
mod layout {
    pub mod header;
}
mod pages {
    pub mod about;
    pub mod home;
    pub mod testimonials;
}

use layout::header::Header;
use pages::{about::About, home::Home, testimonials::TestimonialSection};
use testimonials::Testimonial;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub testimonials: Rc<[Testimonial]>,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    html! {
        <div class="site">
            <Header />
            <Home />
            <About />
            <TestimonialSection testimonials={props.testimonials.clone()} />

            <style>
                {r#"
                * {
                    margin: 0;
                    padding: 0;
                    box-sizing: border-box;
                }

                body {
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    background: #f9fafb;
                }

                @keyframes fadeIn {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }

                @keyframes riseIn {
                    from {
                        opacity: 0;
                        transform: translateY(20px);
                    }
                    to {
                        opacity: 1;
                        transform: translateY(0);
                    }
                }
                "#}
            </style>
        </div>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");

    let testimonials = match testimonials::load() {
        Ok(list) => {
            info!("Loaded {} testimonials", list.len());
            list
        }
        Err(e) => {
            error!("Testimonials unavailable: {}", e);
            Rc::from(Vec::new())
        }
    };

    yew::Renderer::<App>::with_props(AppProps { testimonials }).render();
}
