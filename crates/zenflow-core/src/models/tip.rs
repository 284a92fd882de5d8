/// A static wellbeing tip shown on the tips tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tip {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

static TIPS: [Tip; 8] = [
    Tip {
        id: "1",
        title: "Deep breathing",
        description: "Practice deep breathing for 5 minutes. Breathe in through your nose \
                      counting to 4, hold for 4 seconds and breathe out through your mouth \
                      counting to 4.",
        icon: "leaf-outline",
    },
    Tip {
        id: "2",
        title: "Walk outdoors",
        description: "A 15 minute walk can noticeably lower stress levels and lift your mood.",
        icon: "walk-outline",
    },
    Tip {
        id: "3",
        title: "Meditation",
        description: "Set aside 10 minutes a day to meditate. Use a guided meditation app or \
                      simply focus on your breathing.",
        icon: "flower-outline",
    },
    Tip {
        id: "4",
        title: "Hydration",
        description: "Drink water regularly during the day. Dehydration can raise cortisol, \
                      the stress hormone.",
        icon: "water-outline",
    },
    Tip {
        id: "5",
        title: "Regular breaks",
        description: "Take a 5 minute break every hour of work. Stand up, stretch and walk \
                      around.",
        icon: "time-outline",
    },
    Tip {
        id: "6",
        title: "Quality sleep",
        description: "Aim for 7-8 hours of sleep a night. Enough sleep is essential for \
                      managing stress.",
        icon: "moon-outline",
    },
    Tip {
        id: "7",
        title: "Balanced diet",
        description: "Avoid processed food and excess sugar. Prefer natural, nutrient-rich \
                      food.",
        icon: "nutrition-outline",
    },
    Tip {
        id: "8",
        title: "Fewer notifications",
        description: "Turn off unnecessary phone notifications to cut down the constant \
                      stream of information that can fuel anxiety.",
        icon: "notifications-outline",
    },
];

pub fn all_tips() -> &'static [Tip] {
    &TIPS
}
