//! Article library pages

use crate::components::publications::Section;

pub(crate) mod index;
pub(crate) mod show;

pub(crate) const SECTION: Section = Section {
    name: "Articles",
    path: "/articles",
};
