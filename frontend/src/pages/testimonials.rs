use std::num::NonZeroUsize;
use std::rc::Rc;

use yew::prelude::*;

use crate::config;
use crate::rotation::{use_rotation, RotationAction};
use crate::testimonials::Testimonial;

const STAR_PATH: &str = "M10.788 3.21c.448-1.077 1.976-1.077 2.424 0l2.082 5.007 5.404.433c1.164.093 1.636 1.545.749 2.305l-4.117 3.527 1.257 5.273c.271 1.136-.964 2.033-1.96 1.425L12 18.354 7.373 21.18c-.996.608-2.231-.29-1.96-1.425l1.257-5.273-4.117-3.527c-.887-.76-.415-2.212.749-2.305l5.404-.433 2.082-5.006z";

fn star_icon() -> Html {
    html! {
        <svg class="star-icon" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor">
            <path fill-rule="evenodd" clip-rule="evenodd" d={STAR_PATH} />
        </svg>
    }
}

fn testimonial_card(item: &Testimonial, slot: usize) -> Html {
    html! {
        <div key={format!("{}-{}", item.id, slot)} class="testimonial-card">
            <div class="testimonial-avatar">
                <img src={item.image_url.clone()} alt={item.name.clone()} />
            </div>
            <div class="testimonial-stars">
                { for (0..item.rating).map(|_| star_icon()) }
            </div>
            <blockquote class="testimonial-quote">
                {format!("“{}”", item.text)}
            </blockquote>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TestimonialSectionProps {
    pub testimonials: Rc<[Testimonial]>,
}

#[function_component(TestimonialSection)]
pub fn testimonial_section(props: &TestimonialSectionProps) -> Html {
    let Some(len) = NonZeroUsize::new(props.testimonials.len()) else {
        return html! {};
    };

    html! {
        <section class="testimonials" id="testimonial">
            <div class="testimonials-inner">
                <div class="testimonials-header">
                    <div class="testimonials-heading">
                        <div class="testimonials-eyebrow">
                            <h4>{"Testimonial"}</h4>
                            <div class="eyebrow-rule"></div>
                        </div>
                        <h2>{"Stories of Student Achievement"}</h2>
                    </div>
                    <p class="testimonials-lead">
                        {"Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris."}
                    </p>
                </div>

                <Carousel testimonials={props.testimonials.clone()} len={len} />
            </div>

            <style>
                {r#"
                .testimonials {
                    padding: 5rem 0;
                    background: #fff;
                    overflow: hidden;
                }

                .testimonials-inner {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 2rem;
                }

                .testimonials-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-end;
                    gap: 2rem;
                    margin-bottom: 4rem;
                }

                .testimonials-heading {
                    flex: 0 0 50%;
                }

                .testimonials-eyebrow {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    margin-bottom: 0.75rem;
                }

                .testimonials-eyebrow h4 {
                    color: #ef4444;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    font-size: 0.875rem;
                }

                .eyebrow-rule {
                    height: 1px;
                    width: 3rem;
                    background: #ef4444;
                }

                .testimonials-heading h2 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    color: #111827;
                    line-height: 1.2;
                }

                .testimonials-lead {
                    flex: 0 0 33%;
                    color: #6b7280;
                    line-height: 1.7;
                }

                .testimonial-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2rem;
                }

                .testimonial-card {
                    background: #eff4fa;
                    padding: 3rem;
                    text-align: center;
                    border-radius: 2px;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    opacity: 0;
                    animation: slideInRight 0.5s ease forwards;
                    transition: box-shadow 0.3s ease;
                }

                .testimonial-card:hover {
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                }

                .testimonial-avatar {
                    margin-bottom: 1.5rem;
                }

                .testimonial-avatar img {
                    width: 5rem;
                    height: 5rem;
                    border-radius: 50%;
                    object-fit: cover;
                    border: 4px solid #fff;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                }

                .testimonial-stars {
                    display: flex;
                    gap: 0.25rem;
                    margin-bottom: 1.5rem;
                }

                .star-icon {
                    width: 1.5rem;
                    height: 1.5rem;
                    color: #facc15;
                }

                .testimonial-quote {
                    color: #1f2937;
                    font-weight: 700;
                    font-size: 1.125rem;
                    line-height: 1.4;
                }

                .pagination {
                    display: flex;
                    justify-content: center;
                    align-items: center;
                    margin-top: 3rem;
                    gap: 0.5rem;
                }

                .pagination-dot {
                    background: none;
                    border: none;
                    padding: 0.25rem;
                    height: 0.5rem;
                    display: flex;
                    align-items: center;
                    cursor: pointer;
                }

                .pagination-dot span {
                    display: block;
                    height: 0.5rem;
                    width: 0.5rem;
                    background: #d1d5db;
                    border-radius: 2px;
                    transition: width 0.3s cubic-bezier(0.34, 1.3, 0.64, 1), background 0.2s ease;
                }

                .pagination-dot:hover span {
                    background: #9ca3af;
                }

                .pagination-dot.active span {
                    width: 2.5rem;
                    background: #2563eb;
                }

                @keyframes slideInRight {
                    from {
                        opacity: 0;
                        transform: translateX(50px);
                    }
                    to {
                        opacity: 1;
                        transform: translateX(0);
                    }
                }

                @media (max-width: 1024px) {
                    .testimonials-header {
                        flex-direction: column;
                        align-items: flex-start;
                    }
                }

                @media (max-width: 768px) {
                    .testimonial-grid {
                        grid-template-columns: 1fr;
                    }

                    .testimonial-card {
                        padding: 2.5rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct CarouselProps {
    testimonials: Rc<[Testimonial]>,
    len: NonZeroUsize,
}

/// Two visible cards plus pagination dots, advanced by the rotation timer.
#[function_component(Carousel)]
fn carousel(props: &CarouselProps) -> Html {
    let rotation = use_rotation(props.len, config::ROTATION_PERIOD_MS);
    let active = rotation.active();

    let cards = match rotation.visible_pair(&props.testimonials[..]) {
        Some((first, second)) => html! {
            <>
                { testimonial_card(first, 0) }
                { testimonial_card(second, 1) }
            </>
        },
        None => html! {},
    };

    html! {
        <>
            <div class="testimonial-grid">
                { cards }
            </div>

            <div class="pagination">
                { for (0..rotation.len().get()).map(|index| {
                    let onclick = {
                        let rotation = rotation.clone();
                        Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            rotation.dispatch(RotationAction::Select(index));
                        })
                    };
                    html! {
                        <button class={classes!("pagination-dot", (index == active).then(|| "active"))} onclick={onclick}>
                            <span></span>
                        </button>
                    }
                }) }
            </div>
        </>
    }
}
