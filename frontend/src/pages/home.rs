use yew::prelude::*;

const HERO_BANNER_SRC: &str = "https://images.unsplash.com/photo-1502602898657-3e91760cbb34?ixlib=rb-4.0.3&auto=format&fit=crop&w=1920&q=80";

struct InfoCard {
    title: &'static str,
    body: &'static str,
    class: &'static str,
    icon: &'static str,
}

const INFO_CARDS: [InfoCard; 3] = [
    InfoCard {
        title: "One-on-One Counselling",
        body: "Personalized mentorship to help you choose the right college and country based on your budget and career goals.",
        class: "info-card info-card--navy",
        icon: "👥",
    },
    InfoCard {
        title: "Clear Guidance",
        body: "Complete transparency on Fees, Documents, and Eligibility. No hidden costs or confusing jargon.",
        class: "info-card info-card--blue",
        icon: "📖",
    },
    InfoCard {
        title: "Fast Process",
        body: "From Application to Visa approval, we streamline the workflow to get you to your campus as quickly as possible.",
        class: "info-card info-card--red",
        icon: "🏆",
    },
];

const CHECKLIST: [&str; 3] = [
    "Free Registration (2 mins)",
    "WhatsApp Support 24×7",
    "Exclusive Webinars",
];

fn avatar_badges() -> Html {
    html! {
        <div class="avatar-row">
            { for (1..=3).map(|i| html! {
                <div class="avatar">
                    <img src={format!("https://i.pravatar.cc/100?img={}", i + 10)} alt="Student" />
                </div>
            }) }
            <div class="avatar avatar--count">{"2K+"}</div>
        </div>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="home">
            <section class="hero">
                <div class="hero-background">
                    <img src={HERO_BANNER_SRC} alt="Study Abroad France" />
                    <div class="hero-overlay"></div>
                </div>

                <div class="hero-content">
                    <div class="hero-stack">
                        <div class="hero-tagline">{"Study Abroad & Local Colleges"}</div>

                        <h1 class="hero-title">
                            {"Your Gateway to"}<br />
                            {"MBBS in "}
                            <span class="pencil-word">
                                {"France"}
                                <svg class="pencil-mark" viewBox="0 0 200 20" fill="none" xmlns="http://www.w3.org/2000/svg">
                                    <path d="M2 15C40 5 150 5 198 12" stroke="currentColor" stroke-width="8" stroke-linecap="round" />
                                </svg>
                            </span>
                            {" & Local Admissions"}
                        </h1>

                        <p class="hero-subtext">
                            <span class="hero-strong">{"Confused about MBBS or Local Admissions?"}</span><br />
                            {"We guide you from "}<span class="hero-highlight">{"A → Z"}</span>
                            {" : Course selection, Fees, Documents, Application & Visa support."}
                        </p>

                        <div class="hero-checklist">
                            { for CHECKLIST.iter().map(|item| html! {
                                <div class="check-item">
                                    <span class="check-icon">{"✓"}</span>
                                    <span>{*item}</span>
                                </div>
                            }) }
                        </div>

                        <div class="hero-buttons">
                            <button class="register-button">
                                {"REGISTER NOW"}
                                <i class="arrow">{"→"}</i>
                            </button>
                            <button class="whatsapp-button">
                                <span class="whatsapp-icon">{"💬"}</span>
                                {"WHATSAPP US"}
                            </button>
                        </div>
                    </div>
                </div>
            </section>

            <div class="info-cards">
                { for INFO_CARDS.iter().enumerate().map(|(i, card)| html! {
                    <div class={card.class} style={format!("animation-delay: {:.1}s;", 0.1 * (i + 1) as f64)}>
                        { if i == INFO_CARDS.len() - 1 { avatar_badges() } else { html! {} } }
                        <div class="info-card-head">
                            <span class="info-card-icon">{card.icon}</span>
                            <h3>{card.title}</h3>
                        </div>
                        <p>{card.body}</p>
                    </div>
                }) }
            </div>

            <style>
                {r#"
                .home {
                    width: 100%;
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    background: #f9fafb;
                }

                .hero {
                    position: relative;
                    min-height: 850px;
                    display: flex;
                    align-items: center;
                    padding-bottom: 8rem;
                }

                .hero-background {
                    position: absolute;
                    inset: 0;
                    z-index: 0;
                }

                .hero-background img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    object-position: top;
                }

                .hero-overlay {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to right, rgba(0, 0, 0, 0.95), rgba(0, 0, 0, 0.7), transparent);
                }

                .hero-content {
                    position: relative;
                    z-index: 10;
                    width: 100%;
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 3rem;
                }

                .hero-stack {
                    max-width: 48rem;
                }

                .hero-stack > * {
                    opacity: 0;
                    animation: riseIn 0.6s ease forwards;
                }

                .hero-stack > *:nth-child(1) { animation-delay: 0.2s; }
                .hero-stack > *:nth-child(2) { animation-delay: 0.4s; }
                .hero-stack > *:nth-child(3) { animation-delay: 0.6s; }
                .hero-stack > *:nth-child(4) { animation-delay: 0.8s; }
                .hero-stack > *:nth-child(5) { animation-delay: 1.0s; }

                .hero-tagline {
                    color: #d1d5db;
                    font-size: 0.875rem;
                    font-weight: 500;
                    letter-spacing: 0.025em;
                    margin-bottom: 1rem;
                }

                .hero-title {
                    font-size: 3.75rem;
                    font-weight: 700;
                    color: #fff;
                    line-height: 1.15;
                    margin-bottom: 1.5rem;
                }

                .pencil-word {
                    position: relative;
                    display: inline-block;
                    z-index: 10;
                }

                .pencil-mark {
                    position: absolute;
                    width: 110%;
                    height: 1rem;
                    bottom: -0.5rem;
                    left: -0.25rem;
                    color: #dc2626;
                    z-index: -10;
                    opacity: 0.9;
                }

                .pencil-mark path {
                    stroke-dasharray: 220;
                    stroke-dashoffset: 220;
                    animation: drawPencil 1.5s ease-in-out 1s forwards;
                }

                .hero-subtext {
                    color: #d1d5db;
                    font-size: 1.25rem;
                    line-height: 1.6;
                    max-width: 42rem;
                    margin-bottom: 1.5rem;
                }

                .hero-strong {
                    color: #fff;
                    font-weight: 600;
                }

                .hero-highlight {
                    color: #facc15;
                    font-weight: 700;
                }

                .hero-checklist {
                    display: flex;
                    gap: 0.5rem 1.5rem;
                    margin-bottom: 2rem;
                    color: #d1d5db;
                }

                .check-item {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }

                .check-icon {
                    color: #4ade80;
                    font-weight: 700;
                }

                .hero-buttons {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                }

                .register-button,
                .whatsapp-button {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 1rem 2rem;
                    font-weight: 700;
                    border: none;
                    cursor: pointer;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    transition: all 0.3s ease;
                }

                .register-button {
                    background: #D32F2F;
                    color: #fff;
                }

                .register-button:hover {
                    background: #b91c1c;
                }

                .register-button .arrow {
                    font-style: normal;
                    transition: transform 0.3s ease;
                }

                .register-button:hover .arrow {
                    transform: translateX(4px);
                }

                .whatsapp-button {
                    background: #fff;
                    color: #000;
                }

                .whatsapp-button:hover {
                    background: #f0fdf4;
                }

                .info-cards {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    align-items: end;
                    position: relative;
                    z-index: 20;
                    margin-top: -8rem;
                }

                .info-card {
                    padding: 3.5rem;
                    color: #fff;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    min-height: 250px;
                    opacity: 0;
                    animation: riseIn 0.5s ease forwards;
                }

                .info-card--navy { background: #0A2647; }
                .info-card--blue { background: #0F5699; min-height: 300px; }
                .info-card--red {
                    background: #C62828;
                    min-height: 350px;
                    position: relative;
                    overflow: hidden;
                }

                .info-card-head {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    margin-bottom: 1rem;
                }

                .info-card-icon {
                    font-size: 2.5rem;
                }

                .info-card h3 {
                    font-size: 1.5rem;
                    font-weight: 700;
                }

                .info-card p {
                    color: #d1d5db;
                    line-height: 1.6;
                    font-size: 0.875rem;
                }

                .avatar-row {
                    display: flex;
                    align-items: center;
                    margin-bottom: 0.25rem;
                }

                .avatar {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 50%;
                    border: 2px solid #fff;
                    background: #d1d5db;
                    overflow: hidden;
                    margin-left: -0.75rem;
                }

                .avatar:first-child {
                    margin-left: 0;
                }

                .avatar img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }

                .avatar--count {
                    background: #3b82f6;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 0.75rem;
                    font-weight: 700;
                }

                @keyframes drawPencil {
                    to { stroke-dashoffset: 0; }
                }

                @media (max-width: 768px) {
                    .hero {
                        min-height: 650px;
                        padding-bottom: 5rem;
                    }

                    .hero-content {
                        padding: 0 1.5rem;
                    }

                    .hero-title {
                        font-size: 2.25rem;
                    }

                    .hero-subtext {
                        font-size: 1.125rem;
                    }

                    .hero-checklist {
                        flex-direction: column;
                    }

                    .info-cards {
                        grid-template-columns: 1fr;
                        margin-top: -2.5rem;
                    }

                    .info-card {
                        padding: 2.5rem;
                        min-height: 250px;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_banner_is_hosted() {
        assert!(HERO_BANNER_SRC.starts_with("https://"));
    }
}
