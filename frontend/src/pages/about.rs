use yew::prelude::*;

use crate::components::counter::Counter;
use crate::components::reveal::Reveal;

const BANNER_SRC: &str = "https://images.unsplash.com/photo-1562774053-701939374585?ixlib=rb-4.0.3&auto=format&fit=crop&w=1920&q=80";

struct Stat {
    value: f64,
    suffix: &'static str,
    decimals: usize,
    label: &'static str,
    icon: &'static str,
    class: &'static str,
}

const STATS: [Stat; 3] = [
    Stat {
        value: 98.0,
        suffix: "%",
        decimals: 0,
        label: "Admission Success Rate",
        icon: "🎓",
        class: "stat-card stat-card--red",
    },
    Stat {
        value: 5.4,
        suffix: "k",
        decimals: 1,
        label: "Students Placed",
        icon: "👥",
        class: "stat-card stat-card--blue",
    },
    Stat {
        value: 15.0,
        suffix: " Years",
        decimals: 0,
        label: "Education Experience",
        icon: "📅",
        class: "stat-card stat-card--navy",
    },
];

const PARTNERS: [(&str, &str); 5] = [
    ("🛡", "Logoipsum"),
    ("🌐", "Logoipsum"),
    ("🏅", "IPSUM"),
    ("📚", "Logoipsum"),
    ("💼", "logoipsum"),
];

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section class="about">
            <div class="about-main">
                <Reveal class={classes!("about-grid")}>
                    <div class="about-text">
                        <div class="eyebrow">
                            <span class="eyebrow-line"></span>
                            <span class="eyebrow-label">{"About EduConsultants"}</span>
                        </div>
                        <h2>{"Welcome to "}<span class="accent">{"EduConsultants"}</span></h2>
                        <p>
                            {"EduConsultants is a student-focused career & admissions support system helping students choose the right program with full clarity."}
                        </p>
                        <p>
                            {"From "}<span class="strong">{"counselling → application → admission → visa"}</span>
                            {", we guide you end-to-end to ensure your journey to global education is seamless."}
                        </p>
                    </div>

                    <div class="stat-list">
                        { for STATS.iter().map(|stat| html! {
                            <div class={stat.class}>
                                <div class="stat-icon">{stat.icon}</div>
                                <div>
                                    <h3>
                                        <Counter value={stat.value} suffix={stat.suffix} decimals={stat.decimals} />
                                    </h3>
                                    <p>{stat.label}</p>
                                </div>
                            </div>
                        }) }
                    </div>
                </Reveal>
            </div>

            <Reveal class={classes!("about-banner")}>
                <div class="about-banner-shade"></div>
                <img src={BANNER_SRC} alt="University Campus Building" />
            </Reveal>

            <Reveal class={classes!("trusted")}>
                <div class="trusted-inner">
                    <div class="trusted-row">
                        <h2>{"Trusted by 100K+"}<br />{"Educational Institutions"}</h2>
                        <p>
                            {"We partner with prestigious universities and schools worldwide to ensure our students get the best possible guidance and opportunities for their future careers."}
                        </p>
                    </div>
                    <div class="partner-logos">
                        { for PARTNERS.iter().map(|(icon, name)| html! {
                            <div class="partner-logo">
                                <span class="partner-icon">{*icon}</span>
                                <span class="partner-name">{*name}</span>
                            </div>
                        }) }
                    </div>
                </div>
            </Reveal>

            <style>
                {r#"
                .about {
                    position: relative;
                    width: 100%;
                    background: #fff;
                    padding-top: 5rem;
                    overflow: hidden;
                }

                .about-main {
                    max-width: 1280px;
                    margin: 0 auto 5rem;
                    padding: 0 2rem;
                }

                .about-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 5rem;
                }

                .about-grid > * > * {
                    opacity: 0;
                }

                .about-grid.visible > * > * {
                    animation: riseIn 0.6s ease forwards;
                }

                .about-text > *:nth-child(2) { animation-delay: 0.2s; }
                .about-text > *:nth-child(3) { animation-delay: 0.4s; }
                .about-text > *:nth-child(4) { animation-delay: 0.6s; }
                .stat-list > *:nth-child(1) { animation-delay: 0.2s; }
                .stat-list > *:nth-child(2) { animation-delay: 0.4s; }
                .stat-list > *:nth-child(3) { animation-delay: 0.6s; }

                .about-text {
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                }

                .eyebrow {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-bottom: 1rem;
                }

                .eyebrow-line {
                    height: 2px;
                    width: 3rem;
                    background: #dc2626;
                }

                .eyebrow-label {
                    color: #dc2626;
                    font-weight: 700;
                    letter-spacing: 0.05em;
                    text-transform: uppercase;
                    font-size: 0.875rem;
                }

                .about-text h2 {
                    font-size: 2.25rem;
                    font-weight: 800;
                    color: #111827;
                    margin-bottom: 1.5rem;
                    line-height: 1.2;
                }

                .about-text .accent {
                    color: #dc2626;
                }

                .about-text p {
                    font-size: 1.125rem;
                    color: #4b5563;
                    margin-bottom: 1.5rem;
                    line-height: 1.7;
                }

                .about-text .strong {
                    font-weight: 600;
                    color: #111827;
                }

                .stat-list {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                    justify-content: center;
                }

                .stat-card {
                    display: flex;
                    align-items: flex-start;
                    padding: 2rem;
                    border-left: 4px solid;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                    transition: box-shadow 0.3s ease;
                }

                .stat-card:hover {
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                }

                .stat-card--red { background: #f9fafb; border-color: #dc2626; }
                .stat-card--blue { background: #eff6ff; border-color: #3b82f6; }
                .stat-card--navy { background: #f1f5f9; border-color: #1e293b; }

                .stat-icon {
                    margin-right: 1.5rem;
                    font-size: 2.5rem;
                }

                .stat-card h3 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    color: #111827;
                    margin-bottom: 0.25rem;
                }

                .stat-card p {
                    font-weight: 600;
                    color: #1f2937;
                }

                .about-banner {
                    position: relative;
                    width: 100%;
                    overflow: hidden;
                    opacity: 0;
                }

                .about-banner.visible {
                    animation: riseIn 0.8s ease 0.2s forwards;
                }

                .about-banner-shade {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, rgba(0, 0, 0, 0.2), transparent);
                    z-index: 10;
                }

                .about-banner img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    object-position: top;
                    transition: transform 1s ease;
                }

                .about-banner img:hover {
                    transform: scale(1.05);
                }

                .trusted {
                    background: #0B1C3E;
                    padding: 4rem 0;
                    opacity: 0;
                }

                .trusted.visible {
                    animation: fadeIn 0.8s ease forwards;
                }

                .trusted-inner {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 2rem;
                }

                .trusted-row {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 2rem;
                    margin-bottom: 3rem;
                    padding-bottom: 3rem;
                    border-bottom: 1px solid rgba(55, 65, 81, 0.5);
                }

                .trusted-row h2 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    color: #fff;
                    max-width: 32rem;
                    line-height: 1.2;
                }

                .trusted-row p {
                    color: #9ca3af;
                    font-size: 1.125rem;
                    max-width: 36rem;
                    line-height: 1.7;
                }

                .partner-logos {
                    display: grid;
                    grid-template-columns: repeat(5, 1fr);
                    gap: 2rem;
                    align-items: center;
                    justify-items: center;
                    opacity: 0.8;
                }

                .partner-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    cursor: pointer;
                    transition: opacity 0.2s ease;
                }

                .partner-logo:hover {
                    opacity: 1;
                }

                .partner-icon {
                    font-size: 2rem;
                }

                .partner-name {
                    color: #fff;
                    font-weight: 700;
                    font-size: 1.25rem;
                    letter-spacing: -0.025em;
                }

                @media (max-width: 1024px) {
                    .about-grid {
                        grid-template-columns: 1fr;
                        gap: 3rem;
                    }
                }

                @media (max-width: 768px) {
                    .trusted-row {
                        flex-direction: column;
                        align-items: flex-start;
                    }

                    .partner-logos {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_is_hosted() {
        assert!(BANNER_SRC.starts_with("https://"));
    }
}
