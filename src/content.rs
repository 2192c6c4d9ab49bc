//! Static page content: the guide's profile and the two card grids.

pub struct PersonalInfo {
    pub name: &'static str,
    pub title: &'static str,
    pub location: &'static str,
    pub email: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
    pub guide_url: &'static str,
    pub bio: &'static str,
    pub practices: &'static [&'static str],
    pub highlights: &'static [&'static str],
}

pub const PERSONAL_INFO: PersonalInfo = PersonalInfo {
    name: "Sarah Parker",
    title: "Mindfulness Guide",
    location: "Zen Valley, CA",
    email: "sarah.parker@example.com",
    github: "https://github.com/sarahparker",
    linkedin: "https://linkedin.com/in/sarahparker",
    guide_url: "/assets/mindfulness-guide.pdf",
    bio: "Certified mindfulness instructor with 5+ years of experience in meditation \
          and breathwork. Helping others find peace and clarity in their daily lives.",
    practices: &[
        "Meditation",
        "Breathwork",
        "Sound Healing",
        "Body Scanning",
        "Walking Meditation",
        "Mindful Movement",
        "Nature Connection",
        "Stress Reduction",
    ],
    highlights: &[
        "1000+ guided sessions",
        "Published mindfulness research",
        "Retreat facilitator",
        "Mindfulness app creator",
    ],
};

#[derive(Clone, PartialEq)]
pub struct Practice {
    pub title: &'static str,
    pub description: &'static str,
    pub techniques: &'static [&'static str],
    pub benefits: &'static [&'static str],
    pub image_url: &'static str,
    pub guide_url: &'static str,
}

pub const PRACTICES: &[Practice] = &[
    Practice {
        title: "Morning Meditation",
        description: "A gentle morning practice focusing on breath awareness and setting \
                      intentions for the day ahead.",
        techniques: &["Breath Awareness", "Body Scan", "Intention Setting", "Gratitude"],
        benefits: &[
            "Reduced morning anxiety",
            "Improved focus throughout day",
            "Enhanced emotional balance",
        ],
        image_url: "https://images.unsplash.com/photo-1544367567-0f2fcb009e0b?q=80&w=2020",
        guide_url: "#",
    },
    Practice {
        title: "Mindful Movement",
        description: "Combining gentle movement with breath awareness to create a flowing \
                      meditation practice that nurtures both body and mind.",
        techniques: &[
            "Walking Meditation",
            "Gentle Stretching",
            "Mindful Movement",
            "Breath Sync",
        ],
        benefits: &[
            "Improved body awareness",
            "Better stress management",
            "Enhanced mind-body connection",
        ],
        image_url: "https://images.unsplash.com/photo-1506126613408-eca07ce68773?q=80&w=2020",
        guide_url: "#",
    },
];

#[derive(Clone, PartialEq)]
pub struct Session {
    /// ISO date, formatted with chrono at render time.
    pub date: &'static str,
    pub location: &'static str,
    pub practice: &'static str,
    pub duration: &'static str,
    pub focus: &'static str,
    pub insights: &'static str,
    pub image_url: &'static str,
}

pub const SESSIONS: &[Session] = &[
    Session {
        date: "2024-03-15",
        location: "Forest Retreat",
        practice: "Nature Meditation",
        duration: "45 mins",
        focus: "Presence",
        insights: "Deep connection with nature sounds, feeling of complete presence and peace.",
        image_url: "https://images.unsplash.com/photo-1518241353330-0f7941c2d9b5?q=80&w=2070",
    },
    Session {
        date: "2024-02-01",
        location: "Ocean View",
        practice: "Sound Healing",
        duration: "60 mins",
        focus: "Sound",
        insights: "Profound healing experience with ocean waves and singing bowls.",
        image_url: "https://images.unsplash.com/photo-1476611317561-60117649dd94?q=80&w=2070",
    },
    Session {
        date: "2024-01-10",
        location: "Mountain Peak",
        practice: "Sunrise Meditation",
        duration: "30 mins",
        focus: "Light",
        insights: "Beautiful sunrise meditation bringing clarity and renewed energy.",
        image_url: "https://images.unsplash.com/photo-1519681393784-d120267933ba?q=80&w=2070",
    },
];
