//! Locally seeded sample catalog.
//!
//! Eight listings used before any remote integration and as the fixture the
//! filtering and profile tests run against. Reviews are generated with an RNG
//! seeded from the product id, so the same product always carries the same
//! reviews between runs.

use chrono::{Days, NaiveDate};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use bazarek_core::{Price, Product, ProductId, Review, ReviewId, Seller, SpecPair};

/// Anchor date reviews are backdated from, keeping generated dates stable.
const REVIEW_EPOCH: (i32, u32, u32) = (2025, 12, 1);

/// Review texts rotated across products.
const REVIEW_TEMPLATES: &[(u8, &str)] = &[
    (5, "Świetny produkt! Dokładnie jak w opisie, bardzo zadowolony z zakupu."),
    (5, "Polecam! Szybka wysyłka i profesjonalna obsługa."),
    (4, "Dobry produkt, niewielkie ślady użytkowania ale ogólnie jestem zadowolony."),
    (5, "Wszystko jak najbardziej OK. Produkt zgodny z opisem."),
    (4, "Solidny produkt, drobne mankamenty ale za tę cenę wart uwagi."),
    (5, "Bardzo dobry kontakt ze sprzedającym. Produkt pierwsza klasa!"),
    (3, "Produkt w porządku, ale spodziewałem się lepszego stanu."),
    (4, "Dobra jakość, szybka realizacja. Polecam sprzedawcę."),
    (5, "Fantastyczny produkt! Przekroczył moje oczekiwania."),
    (4, "W porządku, zgodny z opisem. Drobne niedociągnięcia ale akceptowalne."),
];

const REVIEWER_NAMES: &[&str] = &[
    "Anna K.", "Piotr M.", "Kasia W.", "Marek S.", "Ola N.", "Tomasz P.", "Ewa L.", "Michał Z.",
];

const REVIEWER_AVATARS: &[&str] = &[
    "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=100",
    "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=100",
    "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=100",
    "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=100",
    "https://images.unsplash.com/photo-1544005313-94ddf0286df2?w=100",
    "https://images.unsplash.com/photo-1506794778202-cad84cf45f1d?w=100",
];

/// Generate 4-6 reviews for a product, deterministically from its id.
#[must_use]
pub fn generate_reviews(product_id: ProductId) -> Vec<Review> {
    #[allow(clippy::cast_sign_loss)] // Catalog ids are positive
    let mut rng = StdRng::seed_from_u64(product_id.as_i32() as u64);

    let mut templates: Vec<(u8, &str)> = REVIEW_TEMPLATES.to_vec();
    templates.shuffle(&mut rng);

    let count = rng.random_range(4..=6);
    let (epoch_year, epoch_month, epoch_day) = REVIEW_EPOCH;
    let epoch = NaiveDate::from_ymd_opt(epoch_year, epoch_month, epoch_day)
        .unwrap_or(NaiveDate::MIN);

    templates
        .into_iter()
        .take(count)
        .enumerate()
        .map(|(index, (rating, comment))| {
            let author = pick(&mut rng, REVIEWER_NAMES);
            let avatar = pick(&mut rng, REVIEWER_AVATARS);
            let days_ago = rng.random_range(0..90);
            let date = epoch
                .checked_sub_days(Days::new(days_ago))
                .unwrap_or(epoch)
                .format("%d.%m.%Y")
                .to_string();

            #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
            let id = ReviewId::new(product_id.as_i32() * 100 + index as i32);
            Review {
                id,
                author: author.to_owned(),
                avatar: avatar.to_owned(),
                rating,
                date,
                comment: comment.to_owned(),
            }
        })
        .collect()
}

/// Pick a random element of a non-empty slice.
fn pick<'a>(rng: &mut StdRng, options: &[&'a str]) -> &'a str {
    let index = rng.random_range(0..options.len());
    options.get(index).copied().unwrap_or_default()
}

/// The eight-listing sample catalog.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn sample_products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new(1),
            title: "Laptop Dell XPS 15".to_owned(),
            price: Price::from_major(4500),
            location: "Warszawa".to_owned(),
            image: "https://images.unsplash.com/photo-1511385348-a52b4a160dc2?w=1080".to_owned(),
            images: vec![
                "https://images.unsplash.com/photo-1511385348-a52b4a160dc2?w=1080".to_owned(),
                "https://images.unsplash.com/photo-1593642632823-8f785ba67e45?w=800".to_owned(),
                "https://images.unsplash.com/photo-1525547719571-a2d4ac8945e2?w=800".to_owned(),
            ],
            category: "Elektronika".to_owned(),
            featured: true,
            description: "Laptop Dell XPS 15 w bardzo dobrym stanie. Używany przez 6 miesięcy, \
                          głównie do pracy biurowej. Kompletny zestaw z ładowarką i oryginalnym \
                          opakowaniem. Procesor Intel Core i7, 16GB RAM, dysk SSD 512GB. Idealny \
                          do pracy i rozrywki."
                .to_owned(),
            condition: "Bardzo dobry".to_owned(),
            seller: Seller {
                name: "Jan Kowalski".to_owned(),
                avatar: "https://images.unsplash.com/photo-1535713875002-d1d0cf377fde?w=200"
                    .to_owned(),
                rating: 4.8,
                reviews: 42,
            },
            specs: vec![
                spec("Procesor", "Intel Core i7-11800H"),
                spec("RAM", "16GB DDR4"),
                spec("Dysk", "512GB SSD NVMe"),
                spec("Ekran", "15.6\" Full HD IPS"),
                spec("Karta graficzna", "NVIDIA GTX 1650"),
            ],
            delivery: labels(&["Wysyłka", "Kurier", "Odbiór osobisty"]),
            reviews: generate_reviews(ProductId::new(1)),
        },
        Product {
            id: ProductId::new(2),
            title: "iPhone 14 Pro 256GB".to_owned(),
            price: Price::from_major(3200),
            location: "Kraków".to_owned(),
            image: "https://images.unsplash.com/photo-1741061963569-9d0ef54d10d2?w=1080".to_owned(),
            images: vec![
                "https://images.unsplash.com/photo-1741061963569-9d0ef54d10d2?w=1080".to_owned(),
            ],
            category: "Elektronika".to_owned(),
            featured: true,
            description: "iPhone 14 Pro w kolorze Space Black, 256GB pamięci. Stan idealny, bez \
                          żadnych zarysowań. Komplet z pudełkiem i akcesoriami. Bateria w 98% \
                          pojemności."
                .to_owned(),
            condition: "Jak nowy".to_owned(),
            seller: Seller {
                name: "Anna Nowak".to_owned(),
                avatar: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=200"
                    .to_owned(),
                rating: 5.0,
                reviews: 28,
            },
            specs: vec![
                spec("Pamięć", "256GB"),
                spec("Kolor", "Space Black"),
                spec("Stan baterii", "98%"),
                spec("Gwarancja", "Do 06.2025"),
            ],
            delivery: labels(&["Wysyłka", "Kurier"]),
            reviews: generate_reviews(ProductId::new(2)),
        },
        Product {
            id: ProductId::new(3),
            title: "Rower górski Trek".to_owned(),
            price: Price::from_major(1800),
            location: "Gdańsk".to_owned(),
            image: "https://images.unsplash.com/photo-1724047314116-de588bcd8c8c?w=1080".to_owned(),
            images: vec![
                "https://images.unsplash.com/photo-1724047314116-de588bcd8c8c?w=1080".to_owned(),
            ],
            category: "Sport".to_owned(),
            featured: true,
            description: "Rower górski Trek w świetnym stanie technicznym. Regularnie \
                          serwisowany, nowe opony i hamulce. Idealny na wyprawy w góry."
                .to_owned(),
            condition: "Bardzo dobry".to_owned(),
            seller: Seller {
                name: "Piotr Wiśniewski".to_owned(),
                avatar: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=200"
                    .to_owned(),
                rating: 4.6,
                reviews: 15,
            },
            specs: Vec::new(),
            delivery: labels(&["Odbiór osobisty"]),
            reviews: generate_reviews(ProductId::new(3)),
        },
        Product {
            id: ProductId::new(4),
            title: "Fotel biurowy ergonomiczny".to_owned(),
            price: Price::from_major(890),
            location: "Poznań".to_owned(),
            image: "https://images.unsplash.com/photo-1636212644134-5867a3807ef9?w=1080".to_owned(),
            images: vec![
                "https://images.unsplash.com/photo-1636212644134-5867a3807ef9?w=1080".to_owned(),
            ],
            category: "Dom".to_owned(),
            featured: false,
            description: "Ergonomiczny fotel biurowy z regulacją wysokości, podłokietników i \
                          oparcia. Świetnie sprawdza się podczas długich godzin pracy."
                .to_owned(),
            condition: "Dobry".to_owned(),
            seller: Seller {
                name: "Kasia Lewandowska".to_owned(),
                avatar: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=200"
                    .to_owned(),
                rating: 4.9,
                reviews: 33,
            },
            specs: Vec::new(),
            delivery: labels(&["Kurier", "Odbiór osobisty"]),
            reviews: generate_reviews(ProductId::new(4)),
        },
        Product {
            id: ProductId::new(5),
            title: "Aparat Canon EOS R6".to_owned(),
            price: Price::from_major(6500),
            location: "Wrocław".to_owned(),
            image: "https://images.unsplash.com/photo-1657826377012-9f444ed01c89?w=1080".to_owned(),
            images: vec![
                "https://images.unsplash.com/photo-1657826377012-9f444ed01c89?w=1080".to_owned(),
            ],
            category: "Elektronika".to_owned(),
            featured: false,
            description: "Profesjonalny aparat Canon EOS R6 z obiektywem 24-105mm. Niska liczba \
                          migawek, stan idealny."
                .to_owned(),
            condition: "Jak nowy".to_owned(),
            seller: Seller {
                name: "Marcin Zieliński".to_owned(),
                avatar: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=200"
                    .to_owned(),
                rating: 5.0,
                reviews: 19,
            },
            specs: Vec::new(),
            delivery: labels(&["Wysyłka", "Kurier"]),
            reviews: generate_reviews(ProductId::new(5)),
        },
        Product {
            id: ProductId::new(6),
            title: "Piłka do koszykówki Spalding".to_owned(),
            price: Price::from_major(120),
            location: "Katowice".to_owned(),
            image: "https://images.unsplash.com/photo-1519861531473-9200262188bf?w=800".to_owned(),
            images: vec![
                "https://images.unsplash.com/photo-1519861531473-9200262188bf?w=800".to_owned(),
            ],
            category: "Sport".to_owned(),
            featured: false,
            description: "Profesjonalna piłka do koszykówki Spalding. Używana kilka razy, w \
                          doskonałym stanie."
                .to_owned(),
            condition: "Bardzo dobry".to_owned(),
            seller: Seller {
                name: "Tomasz Wójcik".to_owned(),
                avatar: "https://images.unsplash.com/photo-1506794778202-cad84cf45f1d?w=200"
                    .to_owned(),
                rating: 4.8,
                reviews: 31,
            },
            specs: Vec::new(),
            delivery: labels(&["Wysyłka", "Odbiór osobisty"]),
            reviews: generate_reviews(ProductId::new(6)),
        },
        Product {
            id: ProductId::new(7),
            title: "Stół drewniany rozkładany".to_owned(),
            price: Price::from_major(450),
            location: "Łódź".to_owned(),
            image: "https://images.unsplash.com/photo-1617806118233-18e1de247200?w=800".to_owned(),
            images: vec![
                "https://images.unsplash.com/photo-1617806118233-18e1de247200?w=800".to_owned(),
            ],
            category: "Dom".to_owned(),
            featured: false,
            description: "Solidny drewniany stół z możliwością rozkładania. Idealny na rodzinne \
                          spotkania."
                .to_owned(),
            condition: "Dobry".to_owned(),
            seller: Seller {
                name: "Ewa Kowalczyk".to_owned(),
                avatar: "https://images.unsplash.com/photo-1544005313-94ddf0286df2?w=200"
                    .to_owned(),
                rating: 4.7,
                reviews: 24,
            },
            specs: Vec::new(),
            delivery: labels(&["Odbiór osobisty", "Kurier"]),
            reviews: generate_reviews(ProductId::new(7)),
        },
        Product {
            id: ProductId::new(8),
            title: "Słuchawki Sony WH-1000XM5".to_owned(),
            price: Price::from_major(1200),
            location: "Warszawa".to_owned(),
            image: "https://images.unsplash.com/photo-1572119244337-bcb4aae995af?w=1080".to_owned(),
            images: vec![
                "https://images.unsplash.com/photo-1572119244337-bcb4aae995af?w=1080".to_owned(),
            ],
            category: "Elektronika".to_owned(),
            featured: false,
            description: "Najnowsze słuchawki Sony z aktywną redukcją szumów. Komplet z etui i \
                          wszystkimi akcesoriami."
                .to_owned(),
            condition: "Jak nowy".to_owned(),
            seller: Seller {
                name: "Michał Szymański".to_owned(),
                avatar: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=200"
                    .to_owned(),
                rating: 4.9,
                reviews: 47,
            },
            specs: Vec::new(),
            delivery: labels(&["Wysyłka", "Kurier", "Odbiór osobisty"]),
            reviews: generate_reviews(ProductId::new(8)),
        },
    ]
}

fn spec(label: &str, value: &str) -> SpecPair {
    SpecPair {
        label: label.to_owned(),
        value: value.to_owned(),
    }
}

fn labels(values: &[&str]) -> Vec<String> {
    values.iter().map(|&v| v.to_owned()).collect()
}
