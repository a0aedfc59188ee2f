//! Built-in showcase table for the JABAA 3.0 startups page.

use crate::data::{EntryBody, ImageRef, ShowcaseEntry};

const TEMPLATES_URL: &str = "https://ui.aceternity.com/templates";

fn paragraph(text: &'static str) -> EntryBody {
    EntryBody::lazy(move || text.to_string())
}

pub(crate) fn entries() -> Vec<ShowcaseEntry> {
    vec![
        ShowcaseEntry::new(
            "Tech Date",
            ImageRef::new("https://media.licdn.com/dms/image/v2/D4D0BAQG81NXig_IURA/company-logo_200_200/company-logo_200_200/0/1722780850157?e=1743033600&v=beta&t=R0QJk6MBMVJT_DPg13pEQPhPzHgQfctxY0Oyttqu964"),
            ImageRef::new("https://media.licdn.com/dms/image/v2/D5622AQHraICZVtZyYg/feedshare-shrink_2048_1536/B56ZPlUL_ZGsAo-/0/1734719102414?e=1737590400&v=beta&t=UlAUruweaPdpl2DYDlUBR2U5zh_l8pCD4J2xQVealpA"),
        )
        .description("Select * from earth where person = 'like you'")
        .cta("View", TEMPLATES_URL)
        .body(paragraph(
            "Lana Del Rey, an iconic American singer-songwriter, is celebrated for \
             her melancholic and cinematic music style. Born Elizabeth Woolridge \
             Grant in New York City, she has captivated audiences worldwide with \
             her haunting voice and introspective lyrics.",
        )),
        ShowcaseEntry::new(
            "NET-R",
            ImageRef::new("https://media.licdn.com/dms/image/v2/D560BAQFmt7JKfk2Hyg/company-logo_200_200/company-logo_200_200/0/1722772282762?e=1743033600&v=beta&t=RS0veANmcmQeKs9mLGoJ3eOw4Ys3JR7H2Qp6O6xqH9E"),
            ImageRef::new("https://media.licdn.com/dms/image/v2/D5622AQGHUYFbz-je1g/feedshare-shrink_2048_1536/feedshare-shrink_2048_1536/0/1723373601586?e=1737590400&v=beta&t=JL9wG7qUrknAhcDIS0lPDqbsqvLbDYwshfy1TyNaUdM"),
        )
        .description("Whisper that guide your vision")
        .cta("View", "https://www.linkedin.com/company/netr-a/")
        .body(paragraph(
            "Babu Maan, a legendary Punjabi singer, is renowned for his soulful \
             voice and profound lyrics that resonate deeply with his audience. Born \
             in the village of Khant Maanpur in Punjab, India, he has become a \
             cultural icon in the Punjabi music industry.",
        )),
        ShowcaseEntry::new(
            "VISVASA",
            ImageRef::new("https://media.licdn.com/dms/image/v2/D560BAQHkecfUpwzNhQ/company-logo_200_200/company-logo_200_200/0/1722345386979?e=1743033600&v=beta&t=u_UUPGNhYDqyen1H-Bbt2VQeq5C4OM12iCaUYenJ2gA"),
            ImageRef::new("https://assets.aceternity.com/demos/metallica-after.jpeg"),
        )
        .cta("View", TEMPLATES_URL)
        .body(paragraph(
            "Metallica, an iconic American heavy metal band, is renowned for their \
             powerful sound and intense performances that resonate deeply with \
             their audience. Formed in Los Angeles, California, they have become a \
             cultural icon in the heavy metal music industry.",
        )),
        ShowcaseEntry::new(
            "SKYOPS AI",
            ImageRef::new("https://assets.aceternity.com/demos/led-zeppelin.jpeg"),
            ImageRef::new("https://assets.aceternity.com/demos/led-zeppelin-after.jpeg"),
        )
        .description("TERRAFORM AUTOMATION")
        .cta("View", TEMPLATES_URL)
        .body(paragraph(
            "Led Zeppelin, a legendary British rock band, is renowned for their \
             innovative sound and profound impact on the music industry. Formed in \
             London in 1968, they have become a cultural icon in the rock music \
             world.",
        )),
        ShowcaseEntry::new(
            "CAR PARKING",
            ImageRef::new("https://assets.aceternity.com/demos/toh-phir-aao.jpeg"),
            ImageRef::new("https://assets.aceternity.com/demos/toh-phir-aao-after.jpeg"),
        )
        .description("PARK YOUR CAR")
        .cta("View", TEMPLATES_URL)
        .body(paragraph(
            "\"Aawarapan\", a Bollywood movie starring Emraan Hashmi, is \
             renowned for its intense storyline and powerful performances. Directed \
             by Mohit Suri, the film has become a significant work in the Indian \
             film industry.",
        )),
    ]
}
