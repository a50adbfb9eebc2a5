use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;

struct NavLink {
    name: &'static str,
    href: &'static str,
    active: bool,
}

const NAV_LINKS: &[NavLink] = &[
    NavLink { name: "HOME", href: "#", active: true },
    NavLink { name: "ABOUT", href: "#", active: false },
    NavLink { name: "ACADEMICS", href: "#", active: false },
    NavLink { name: "FACULTIES", href: "#", active: false },
    NavLink { name: "CAMPUS LIFE", href: "#", active: false },
    NavLink { name: "BLOG", href: "#", active: false },
    NavLink { name: "PAGES", href: "#", active: false },
];

const LOGO_SRC: &str = "/assets/logo/logo.svg";

/// Compact header once the page has scrolled past the top bar.
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > config::HEADER_SCROLL_THRESHOLD
}

#[derive(Clone, Copy, PartialEq)]
enum ContactIcon {
    MapPin,
    Mail,
    Phone,
}

impl ContactIcon {
    fn svg(self) -> Html {
        let path = match self {
            ContactIcon::MapPin => "M12 22s8-6 8-12a8 8 0 0 0-16 0c0 6 8 12 8 12zm0-9a3 3 0 1 0 0-6 3 3 0 0 0 0 6z",
            ContactIcon::Mail => "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2zm18 2-10 7L2 6",
            ContactIcon::Phone => "M22 16.9v3a2 2 0 0 1-2.2 2 19.8 19.8 0 0 1-8.6-3.1 19.5 19.5 0 0 1-6-6A19.8 19.8 0 0 1 2.1 4.2 2 2 0 0 1 4.1 2h3a2 2 0 0 1 2 1.7c.1.9.4 1.8.7 2.7a2 2 0 0 1-.5 2.1L8 9.8a16 16 0 0 0 6 6l1.3-1.3a2 2 0 0 1 2.1-.4c.9.3 1.8.6 2.7.7a2 2 0 0 1 1.7 2z",
        };
        html! {
            <svg class="contact-icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <path d={path} />
            </svg>
        }
    }
}

#[derive(Properties, PartialEq)]
struct ContactItemProps {
    icon: ContactIcon,
    label: &'static str,
    value: &'static str,
    #[prop_or_default]
    mobile: bool,
}

#[function_component(ContactItem)]
fn contact_item(props: &ContactItemProps) -> Html {
    html! {
        <div class={classes!("contact-item", props.mobile.then(|| "mobile"))}>
            <div class="contact-icon-box">{ props.icon.svg() }</div>
            <div class="contact-text">
                {
                    if !props.mobile {
                        html! { <span class="contact-label">{props.label}</span> }
                    } else {
                        html! {}
                    }
                }
                <span class="contact-value">{props.value}</span>
            </div>
        </div>
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    let (_, scroll_y) = use_window_scroll();
    let scrolled = is_scrolled(scroll_y);
    let menu_open = use_state(|| false);

    let open_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(true);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
        })
    };

    html! {
        <>
            <header class={classes!("site-header", scrolled.then(|| "scrolled"))}>
                <div class="top-bar">
                    <div class="container top-bar-inner">
                        <img src={LOGO_SRC} alt="Universite Logo" class="top-bar-logo" />
                        <div class="contact-row">
                            <ContactItem icon={ContactIcon::MapPin} label="Address" value="2155 Palmer Ave, New York" />
                            <ContactItem icon={ContactIcon::Mail} label="Email" value="hello@univer-site.edu" />
                            <ContactItem icon={ContactIcon::Phone} label="Phone Number" value="(217) 555-0113" />
                        </div>
                    </div>
                </div>

                <nav class="main-nav">
                    <div class="container">
                        <div class="mobile-layout">
                            <div class="mobile-logo">
                                <img src={LOGO_SRC} alt="Universite Logo" />
                            </div>
                            <div class="mobile-actions">
                                <button class="burger-button" onclick={open_menu}>
                                    <span></span>
                                    <span></span>
                                    <span></span>
                                </button>
                                <button class="cta-small">{"Contact Us"}</button>
                            </div>
                        </div>

                        <div class="desktop-layout">
                            <div class="nav-links">
                                <div class="mini-logo">
                                    <img src={LOGO_SRC} alt="Logo" />
                                </div>
                                { for NAV_LINKS.iter().map(|link| html! {
                                    <a href={link.href} class={classes!("nav-link", link.active.then(|| "active"))}>
                                        {link.name}
                                        <span class="nav-underline"></span>
                                    </a>
                                }) }
                            </div>
                            <button class="cta-button">{"Contact Us"}</button>
                        </div>
                    </div>
                </nav>
            </header>

            {
                if *menu_open {
                    html! {
                        <>
                            <div class="offcanvas-backdrop" onclick={close_menu.clone()}></div>
                            <div class="offcanvas">
                                <div class="offcanvas-head">
                                    <span>{"Menu"}</span>
                                    <button class="offcanvas-close" onclick={close_menu.clone()}>{"✕"}</button>
                                </div>
                                <div class="offcanvas-body">
                                    { for NAV_LINKS.iter().map(|link| html! {
                                        <a href={link.href} class={classes!("offcanvas-link", link.active.then(|| "active"))}>
                                            {link.name}
                                        </a>
                                    }) }
                                    <div class="offcanvas-contact">
                                        <ContactItem icon={ContactIcon::MapPin} label="Address" value="2155 Palmer Ave, NY" mobile={true} />
                                        <ContactItem icon={ContactIcon::Phone} label="Phone" value="(217) 555-0113" mobile={true} />
                                    </div>
                                </div>
                            </div>
                        </>
                    }
                } else {
                    html! {}
                }
            }

            <div class="header-spacer"></div>

            <style>
                {r#"
                .site-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    z-index: 50;
                    background: #fff;
                    transition: box-shadow 0.3s ease;
                }

                .site-header.scrolled {
                    box-shadow: 0 4px 20px rgba(0, 0, 0, 0.05);
                }

                .container {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 1rem;
                }

                .top-bar {
                    overflow: hidden;
                    border-bottom: 1px solid #f3f4f6;
                    max-height: 120px;
                    opacity: 1;
                    transition: max-height 0.4s ease-in-out, opacity 0.4s ease-in-out;
                }

                .site-header.scrolled .top-bar {
                    max-height: 0;
                    opacity: 0;
                }

                .top-bar-inner {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding-top: 1rem;
                    padding-bottom: 1rem;
                }

                .top-bar-logo {
                    height: 3rem;
                    width: auto;
                    object-fit: contain;
                }

                .contact-row {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }

                .contact-item {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }

                .contact-icon-box {
                    padding: 0.5rem;
                    background: #0077C0;
                    color: #fff;
                    display: flex;
                }

                .contact-item.mobile .contact-icon-box {
                    background: #f3f4f6;
                    color: #0077C0;
                }

                .contact-icon {
                    width: 20px;
                    height: 20px;
                }

                .contact-text {
                    display: flex;
                    flex-direction: column;
                }

                .contact-label {
                    color: #6b7280;
                    font-size: 0.875rem;
                }

                .contact-value {
                    font-weight: 600;
                    font-size: 0.875rem;
                    color: #1f2937;
                }

                .main-nav {
                    background: #fff;
                    padding-block: 16px;
                    transition: padding-block 0.3s ease;
                }

                .site-header.scrolled .main-nav {
                    padding-block: 10px;
                }

                .desktop-layout {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }

                .nav-links {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }

                .mini-logo {
                    overflow: hidden;
                    width: 0;
                    opacity: 0;
                    transition: all 0.3s ease;
                }

                .site-header.scrolled .mini-logo {
                    width: auto;
                    opacity: 1;
                    padding-right: 20px;
                }

                .mini-logo img {
                    height: 2rem;
                    width: auto;
                }

                .nav-link {
                    position: relative;
                    font-size: 0.875rem;
                    font-weight: 700;
                    color: #4b5563;
                    text-decoration: none;
                    transition: color 0.2s ease;
                }

                .nav-link:hover,
                .nav-link.active {
                    color: #C61A1A;
                }

                .nav-underline {
                    position: absolute;
                    bottom: -4px;
                    left: 0;
                    height: 2px;
                    width: 0;
                    background: #C61A1A;
                    transition: width 0.3s ease;
                }

                .nav-link:hover .nav-underline,
                .nav-link.active .nav-underline {
                    width: 100%;
                }

                .cta-button,
                .cta-small {
                    background: #C61A1A;
                    color: #fff;
                    border: none;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    cursor: pointer;
                    transition: background 0.2s ease;
                }

                .cta-button {
                    padding: 0.75rem 1.5rem;
                    font-size: 0.875rem;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                }

                .cta-small {
                    padding: 0 1.25rem;
                    height: 2.5rem;
                    font-size: 0.75rem;
                }

                .cta-button:hover,
                .cta-small:hover {
                    background: #a51515;
                }

                .mobile-layout {
                    display: none;
                    flex-direction: column;
                    gap: 1rem;
                }

                .mobile-logo img {
                    height: 2.5rem;
                    width: auto;
                }

                .mobile-actions {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    border-top: 1px solid #f3f4f6;
                    padding-top: 0.75rem;
                }

                .burger-button {
                    background: #C61A1A;
                    border: none;
                    width: 2.5rem;
                    height: 2.5rem;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    align-items: center;
                    gap: 4px;
                    cursor: pointer;
                }

                .burger-button span {
                    display: block;
                    width: 18px;
                    height: 2px;
                    background: #fff;
                }

                .offcanvas-backdrop {
                    position: fixed;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.6);
                    backdrop-filter: blur(4px);
                    z-index: 60;
                    animation: fadeIn 0.3s ease forwards;
                }

                .offcanvas {
                    position: fixed;
                    top: 0;
                    right: 0;
                    height: 100%;
                    width: 85%;
                    max-width: 24rem;
                    background: #fff;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    z-index: 70;
                    display: flex;
                    flex-direction: column;
                    animation: slideFromRight 0.35s cubic-bezier(0.22, 1, 0.36, 1) forwards;
                }

                .offcanvas-head {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1.5rem;
                    border-bottom: 1px solid #f3f4f6;
                    background: #f9fafb;
                    font-size: 1.25rem;
                    font-weight: 700;
                    color: #111827;
                }

                .offcanvas-close {
                    background: #e5e7eb;
                    border: none;
                    color: #C61A1A;
                    padding: 0.5rem;
                    cursor: pointer;
                }

                .offcanvas-body {
                    display: flex;
                    flex-direction: column;
                    padding: 1.5rem;
                    gap: 0.5rem;
                    overflow-y: auto;
                }

                .offcanvas-link {
                    font-size: 1.125rem;
                    font-weight: 500;
                    padding: 0.75rem 1rem;
                    color: #374151;
                    text-decoration: none;
                }

                .offcanvas-link:hover {
                    background: #f9fafb;
                }

                .offcanvas-link.active {
                    background: #fef2f2;
                    color: #C61A1A;
                }

                .offcanvas-contact {
                    margin-top: 2rem;
                    border-top: 1px solid #e5e7eb;
                    padding-top: 1.5rem;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .header-spacer {
                    height: 120px;
                }

                @keyframes slideFromRight {
                    from { transform: translateX(100%); }
                    to { transform: translateX(0); }
                }

                @media (max-width: 1024px) {
                    .top-bar,
                    .desktop-layout {
                        display: none;
                    }

                    .mobile-layout {
                        display: flex;
                    }

                    .header-spacer {
                        height: 140px;
                    }
                }

                @media (min-width: 1025px) {
                    .offcanvas,
                    .offcanvas-backdrop {
                        display: none;
                    }
                }
                "#}
            </style>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compacts_only_past_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
        assert!(is_scrolled(900.0));
    }

    #[test]
    fn exactly_one_active_nav_link() {
        let active: Vec<&str> = NAV_LINKS.iter().filter(|l| l.active).map(|l| l.name).collect();
        assert_eq!(active, vec!["HOME"]);
        assert_eq!(NAV_LINKS.len(), 7);
    }

    #[test]
    fn logo_ships_with_assets() {
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join(LOGO_SRC.trim_start_matches('/'));
        assert!(path.is_file(), "missing {}", path.display());
    }
}
