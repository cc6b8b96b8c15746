use serde::{Deserialize, Serialize};

/// Picture shown on the left of a journal entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceImage {
    pub src: String,
    pub alt: String,
}

/// A visited location in the travel journal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: u32,
    pub img: PlaceImage,
    pub title: String,
    pub country: String,
    pub google_maps_link: String,
    pub dates: String,
    pub text: String,
}

/// The journal's fixed list of places, in display order.
pub fn places() -> Vec<Place> {
    vec![
        Place {
            id: 1,
            img: PlaceImage {
                src: "https://scrimba.com/links/travel-journal-japan-image-url".to_string(),
                alt: "Mount Fuji".to_string(),
            },
            title: "Mount Fuji".to_string(),
            country: "Japan".to_string(),
            google_maps_link: "https://www.google.com/maps/place/Mount+Fuji/@35.3606421,138.7170637,15z".to_string(),
            dates: "12 Jan, 2021 - 24 Jan, 2021".to_string(),
            text: "Mount Fuji is the tallest mountain in Japan, standing at 3,776 meters (12,380 feet). \
                   Mount Fuji is the single most popular tourist site in Japan, for both Japanese and foreign tourists."
                .to_string(),
        },
        Place {
            id: 2,
            img: PlaceImage {
                src: "https://scrimba.com/links/travel-journal-australia-image-url".to_string(),
                alt: "Sydney Opera House".to_string(),
            },
            title: "Sydney Opera House".to_string(),
            country: "Australia".to_string(),
            google_maps_link: "https://www.google.com/maps/place/Sydney+Opera+House/@-33.8567844,151.213108,17z".to_string(),
            dates: "27 May, 2021 - 8 Jun, 2021".to_string(),
            text: "The Sydney Opera House is a multi-venue performing arts centre in Sydney. \
                   Located on the banks of the Sydney Harbour, it is often regarded as one of the 20th century's \
                   most famous and distinctive buildings."
                .to_string(),
        },
        Place {
            id: 3,
            img: PlaceImage {
                src: "https://scrimba.com/links/travel-journal-norway-image-url".to_string(),
                alt: "Geirangerfjord".to_string(),
            },
            title: "Geirangerfjord".to_string(),
            country: "Norway".to_string(),
            google_maps_link: "https://www.google.com/maps/place/Geirangerfjord/@62.1049113,6.9580908,12z".to_string(),
            dates: "01 Oct, 2021 - 18 Nov, 2021".to_string(),
            text: "The Geiranger Fjord is a fjord in the Sunnmore region of More og Romsdal county, Norway. \
                   It is located entirely in the Stranda Municipality."
                .to_string(),
        },
    ]
}
