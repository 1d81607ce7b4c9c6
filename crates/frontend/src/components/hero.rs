//! Hero banner component.

use yew::prelude::*;

/// Full-height hero with name, tagline, and anchor navigation.
///
/// The reveal class is toggled by a one-shot effect after first render
/// so the CSS entrance transition can run.
#[function_component(Hero)]
pub fn hero() -> Html {
    let revealed = use_state(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with((), move |_| {
            revealed.set(true);
        });
    }

    let reveal = (*revealed).then_some("revealed");

    html! {
        <section class="hero">
            <div class="hero-inner">
                <div class={classes!("reveal", reveal)}>
                    <h1 class="hero-name">{"Avery Collins"}</h1>
                    <p class="hero-tagline">
                        {"Software developer crafting solutions for real problems"}
                    </p>
                </div>
                <nav class={classes!("hero-nav", "reveal", "reveal-delayed", reveal)}>
                    <a href="#about">{"About"}</a>
                    <a href="#work">{"Work"}</a>
                    <a href="#skills">{"Skills"}</a>
                    <a href="#contact">{"Contact"}</a>
                </nav>
            </div>
        </section>
    }
}
