use dioxus::prelude::*;
use common::filter_catalog::FilterGlyph;
use dioxus_free_icons::{Icon, icons::{md_action_icons::MdEvent, md_communication_icons::MdLocationOn, md_social_icons::MdPeople}};


/// Icon for a catalog glyph.
#[component]
pub fn FilterGlyphIcon(glyph: FilterGlyph, style: String) -> Element {
    match glyph {
        FilterGlyph::MapPin => rsx! { Icon { icon: MdLocationOn, style } },
        FilterGlyph::Calendar => rsx! { Icon { icon: MdEvent, style } },
        FilterGlyph::Users => rsx! { Icon { icon: MdPeople, style } },
    }
}
