use tracen_core::DisplayRecord;

use crate::carousel::Carousel;

const SLIDES: [(&str, &str, &str, &str); 4] = [
    (
        "Welcome to Tracen",
        "Nurturing confident, compassionate, and capable individuals through holistic education.",
        "Admission Open",
        "https://images.unsplash.com/photo-1541339907198-e08756dedf3f?q=80&w=2070&auto=format&fit=crop",
    ),
    (
        "State of Art Campus",
        "Expansive grounds, modern facilities, and a vibrant learning environment for all.",
        "Explore Campus",
        "https://images.unsplash.com/photo-1562774053-701939374585?q=80&w=2086&auto=format&fit=crop",
    ),
    (
        "Holistic Development",
        "Programs designed to foster intellectual, social, and physical growth in every student.",
        "Our Programs",
        "https://images.unsplash.com/photo-1523580494863-6f3031224c94?q=80&w=2070&auto=format&fit=crop",
    ),
    (
        "Global Curriculum",
        "International standards of education preparing students for the challenges of tomorrow.",
        "Academics",
        "https://images.unsplash.com/photo-1524178232363-1fb2b075b655?q=80&w=2070&auto=format&fit=crop",
    ),
];

/// Hero carousel slides; `subtitle` carries the call-to-action label.
pub fn slides() -> Vec<DisplayRecord> {
    SLIDES
        .iter()
        .enumerate()
        .map(|(i, (title, text, action, image))| {
            DisplayRecord::new(format!("slide-{}", i + 1), *title)
                .with_subtitle(*action)
                .with_body(*text)
                .with_image(*image)
        })
        .collect()
}

pub fn carousel() -> Carousel {
    Carousel::new(SLIDES.len())
}
