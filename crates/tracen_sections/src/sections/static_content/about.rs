use tracen_core::DisplayRecord;

struct Tab {
    id: &'static str,
    label: &'static str,
    title: &'static str,
    description: &'static str,
    points: [&'static str; 4],
    image: &'static str,
}

const TABS: [Tab; 3] = [
    Tab {
        id: "certification",
        label: "School Certification",
        title: "Recognized Excellence & Accreditation",
        description: "Tracen Boarding School maintains the highest standards of education, recognized by global accreditation bodies.",
        points: [
            "ISO 9001:2015 Certified for Educational Management Systems",
            "Authorized IB World School (PYP, MYP, DP)",
            "Accredited by Council of International Schools (CIS)",
            "Member of Boarding Schools Association (BSA)",
        ],
        image: "https://images.unsplash.com/photo-1580582932707-520aed937b7b?q=80&w=2064&auto=format&fit=crop",
    },
    Tab {
        id: "about",
        label: "About School",
        title: "Our Heritage & Mission",
        description: "Founded in 1995, Tracen has grown from a humble initiative to a leading boarding school known for shaping future leaders.",
        points: [
            "Over 25 years of educational excellence",
            "A diverse community representing 30+ nationalities",
            "Focus on holistic development: Academics, Sports, and Arts",
            "50-acre eco-friendly campus with state-of-the-art facilities",
        ],
        image: "https://images.unsplash.com/photo-1541829070764-84a7d30dd3f3?q=80&w=2069&auto=format&fit=crop",
    },
    Tab {
        id: "exchange",
        label: "Student Exchange Program",
        title: "Global Student Exchange Program",
        description: "We believe in borderless education. Our exchange programs offer students the chance to experience life and learning in a different culture.",
        points: [
            "Partnerships with top schools in UK, USA, Canada, and Australia",
            "Semester-long cultural immersion programs",
            "Language enhancement and global networking opportunities",
            "Scholarships available for meritorious students",
        ],
        image: "https://images.unsplash.com/photo-1529070538774-1843cb3265df?q=80&w=2070&auto=format&fit=crop",
    },
];

/// About/accreditation tabs. No tab is open initially; they toggle like an
/// accordion. The body is the description followed by one line per point.
pub fn tabs() -> Vec<DisplayRecord> {
    TABS.iter()
        .map(|tab| {
            let mut body = tab.description.to_string();
            for point in tab.points {
                body.push_str("\n• ");
                body.push_str(point);
            }
            DisplayRecord::new(tab.id, tab.title)
                .with_subtitle(tab.label)
                .with_body(body)
                .with_image(tab.image)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracen_core::{Selection, ViewState};

    #[test]
    fn test_tabs_toggle_closed() {
        let mut view = ViewState::ready(tabs());
        assert_eq!(view.selection, Selection::None);
        assert!(view.toggle(2));
        assert_eq!(view.selected().unwrap().subtitle, "Student Exchange Program");
        assert!(view.toggle(2));
        assert!(view.selected().is_none());
    }

    #[test]
    fn test_points_follow_description() {
        let certification = &tabs()[0];
        assert!(certification.body.starts_with("Tracen Boarding School"));
        assert_eq!(certification.body.lines().count(), 5);
    }
}
