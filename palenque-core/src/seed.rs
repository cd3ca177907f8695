//! Seed data
//!
//! The dataset a fresh install boots into and everything demo mode
//! serves instead of the live backend: six marketplace services, their
//! six businesses, two pools (one open, one already paid), one tourist
//! route and the default session.

use std::collections::HashMap;

use shared::models::{
    Business, CurrentUser, LinkType, PaymentMethod, PaymentStatus, Pool, PoolLeader, PoolMember,
    PoolPayment, PoolStatus, Route, RouteStop, Service, ServiceExtra, SocialLinks,
};
use shared::util;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn extra(name: &str, price: f64) -> ServiceExtra {
    ServiceExtra {
        name: name.to_string(),
        price,
    }
}

fn social(whatsapp: &str, instagram: &str, facebook: &str) -> SocialLinks {
    SocialLinks {
        whatsapp: Some(whatsapp.to_string()),
        instagram: Some(instagram.to_string()),
        facebook: Some(facebook.to_string()),
        phone: None,
    }
}

fn social_with_phone(whatsapp: &str, instagram: &str, facebook: &str, phone: &str) -> SocialLinks {
    SocialLinks {
        phone: Some(phone.to_string()),
        ..social(whatsapp, instagram, facebook)
    }
}

fn member(name: &str, avatar: &str, paid: bool) -> PoolMember {
    PoolMember {
        name: name.to_string(),
        avatar: avatar.to_string(),
        paid,
    }
}

fn paid_payment(member_id: &str, name: &str, amount: f64, date: i64) -> PoolPayment {
    PoolPayment {
        member_id: member_id.to_string(),
        name: name.to_string(),
        amount,
        status: PaymentStatus::Pagado,
        payment_date: Some(date),
    }
}

/// The six showcase services.
pub fn services() -> Vec<Service> {
    vec![
        Service {
            id: 1,
            name: "Hotel Vista al Volcán".to_string(),
            category: "hotel".to_string(),
            location: "Santa Ana".to_string(),
            rating: 4.9,
            reviews: 127,
            price: 85.0,
            image: "/volcano-view-hotel.jpg".to_string(),
            is_remate: true,
            discount: Some(30),
            allows_pool: true,
            spots_left: 3,
            description: Some(
                "Disfruta de vistas impresionantes al volcán desde tu habitación con todas las comodidades modernas."
                    .to_string(),
            ),
            capacity_min: Some(1),
            capacity_max: Some(4),
            extras: Some(vec![
                extra("Desayuno incluido", 15.0),
                extra("Tour al volcán", 45.0),
                extra("Spa & masajes", 35.0),
            ]),
            ratings: Vec::new(),
            link_types: Some(vec![LinkType::Oferta, LinkType::Descuento]),
            business_id: Some(1),
            business_name: Some("Hoteles Volcán El Salvador".to_string()),
            business_avatar: Some("HV".to_string()),
            business_rating: Some(4.9),
            business_reviews: Some(127),
            gallery_images: Some(strings(&["/volcano-view-hotel.jpg"])),
            features: Some(strings(&[
                "Vistas panorámicas",
                "Spa completo",
                "Restaurante gourmet",
                "WiFi gratis",
                "Piscina temperada",
            ])),
            related_services: Some(vec![2, 4]),
            social_links: Some(social("+50373456789", "@hotelvolcan", "HotelsVolcan")),
        },
        Service {
            id: 2,
            name: "Surf Experience El Tunco".to_string(),
            category: "surf".to_string(),
            location: "El Tunco".to_string(),
            rating: 4.8,
            reviews: 89,
            price: 45.0,
            image: "/surfing-beach.jpg".to_string(),
            is_remate: false,
            discount: None,
            allows_pool: true,
            spots_left: 5,
            description: Some(
                "Clases de surf para todos los niveles con instructores certificados en la mejor playa de El Salvador."
                    .to_string(),
            ),
            capacity_min: Some(1),
            capacity_max: Some(6),
            extras: Some(vec![
                extra("Alquiler de tabla", 20.0),
                extra("Sesión de fotos", 25.0),
                extra("Almuerzo playero", 12.0),
            ]),
            ratings: Vec::new(),
            link_types: Some(vec![LinkType::Oferta]),
            business_id: Some(2),
            business_name: Some("Escuela Surf Tunco".to_string()),
            business_avatar: Some("ST".to_string()),
            business_rating: Some(4.8),
            business_reviews: Some(89),
            gallery_images: Some(strings(&["/surfing-beach.jpg"])),
            features: Some(strings(&[
                "Instructores certificados",
                "Equipo de calidad",
                "Clases personalizadas",
                "Fotografía incluida",
            ])),
            related_services: Some(vec![1, 3]),
            social_links: Some(social("+50373456790", "@surftunco", "SurfTuncoElSalvador")),
        },
        Service {
            id: 3,
            name: "Ruta del Café Premium".to_string(),
            category: "cafe".to_string(),
            location: "Ataco".to_string(),
            rating: 5.0,
            reviews: 64,
            price: 35.0,
            image: "/coffee-plantation.jpg".to_string(),
            is_remate: false,
            discount: None,
            allows_pool: true,
            spots_left: 8,
            description: Some(
                "Recorre las fincas de café más exclusivas y aprende todo sobre el proceso del grano a la taza."
                    .to_string(),
            ),
            capacity_min: Some(2),
            capacity_max: Some(8),
            extras: Some(vec![
                extra("Degustación premium", 15.0),
                extra("Bolsa de café 1lb", 18.0),
                extra("Almuerzo típico", 12.0),
            ]),
            ratings: Vec::new(),
            link_types: Some(vec![LinkType::Feriado]),
            business_id: Some(3),
            business_name: Some("Cafeterías Ataco Exclusivo".to_string()),
            business_avatar: Some("CA".to_string()),
            business_rating: Some(5.0),
            business_reviews: Some(64),
            gallery_images: Some(strings(&["/coffee-plantation.jpg"])),
            features: Some(strings(&[
                "Plantaciones orgánicas",
                "Degustación gourmet",
                "Almuerzo típico",
                "Tour educativo",
            ])),
            related_services: Some(vec![4, 5]),
            social_links: Some(social(
                "+50373456791",
                "@cafeatacoelsalvador",
                "CafeteríasAtaco",
            )),
        },
        Service {
            id: 4,
            name: "Parque El Imposible Trek".to_string(),
            category: "eco".to_string(),
            location: "Ahuachapán".to_string(),
            rating: 4.7,
            reviews: 156,
            price: 55.0,
            image: "/rainforest-hiking.jpg".to_string(),
            is_remate: true,
            discount: Some(20),
            allows_pool: true,
            spots_left: 4,
            description: Some(
                "Aventura en el bosque nuboso más biodiverso de El Salvador con guías expertos.".to_string(),
            ),
            capacity_min: Some(2),
            capacity_max: Some(10),
            extras: Some(vec![
                extra("Guía privado", 30.0),
                extra("Equipo de camping", 25.0),
                extra("Comida orgánica", 15.0),
            ]),
            ratings: Vec::new(),
            link_types: Some(vec![LinkType::Descuento, LinkType::Feriado]),
            business_id: Some(4),
            business_name: Some("Ecoturismo Salvadoreño".to_string()),
            business_avatar: Some("ES".to_string()),
            business_rating: Some(4.7),
            business_reviews: Some(156),
            gallery_images: Some(strings(&["/rainforest-hiking.jpg"])),
            features: Some(strings(&[
                "Biodiversidad única",
                "Guías expertos",
                "Equipamiento completo",
                "Avistamiento de fauna",
            ])),
            related_services: Some(vec![1, 3]),
            social_links: Some(social(
                "+50373456792",
                "@ecoturismosalvador",
                "EcoturismoSalvadoreno",
            )),
        },
        Service {
            id: 5,
            name: "Pupusería La Abuela".to_string(),
            category: "food".to_string(),
            location: "San Salvador".to_string(),
            rating: 4.9,
            reviews: 312,
            price: 12.0,
            image: "/traditional-pupusas.jpg".to_string(),
            is_remate: false,
            discount: None,
            allows_pool: false,
            spots_left: 0,
            description: Some(
                "Las mejores pupusas tradicionales de El Salvador, receta de tres generaciones.".to_string(),
            ),
            capacity_min: Some(1),
            capacity_max: Some(20),
            extras: None,
            ratings: Vec::new(),
            link_types: Some(vec![LinkType::Oferta]),
            business_id: Some(5),
            business_name: Some("Pupusería La Abuela".to_string()),
            business_avatar: Some("PA".to_string()),
            business_rating: Some(4.9),
            business_reviews: Some(312),
            gallery_images: Some(strings(&["/traditional-pupusas.jpg"])),
            features: Some(strings(&[
                "Receta tradicional",
                "Ingredientes frescos",
                "Comida casera",
                "Auténtica salvadoreña",
            ])),
            related_services: Some(vec![6]),
            social_links: Some(social(
                "+50373456793",
                "@pupuseriaabuela",
                "PupuseriaLaAbuela",
            )),
        },
        Service {
            id: 6,
            name: "Festival del Añil".to_string(),
            category: "events".to_string(),
            location: "Suchitoto".to_string(),
            rating: 4.6,
            reviews: 78,
            price: 25.0,
            image: "/cultural-festival.jpg".to_string(),
            is_remate: true,
            discount: Some(15),
            allows_pool: true,
            spots_left: 12,
            description: Some(
                "Vive la tradición del añil con talleres, música y gastronomía local.".to_string(),
            ),
            capacity_min: Some(1),
            capacity_max: Some(15),
            extras: Some(vec![
                extra("Taller de teñido", 20.0),
                extra("Comida tradicional", 10.0),
            ]),
            ratings: Vec::new(),
            link_types: Some(vec![LinkType::Feriado]),
            business_id: Some(6),
            business_name: Some("Eventos Culturales Suchitoto".to_string()),
            business_avatar: Some("EC".to_string()),
            business_rating: Some(4.6),
            business_reviews: Some(78),
            gallery_images: Some(strings(&["/cultural-festival.jpg"])),
            features: Some(strings(&[
                "Taller de teñido",
                "Música tradicional",
                "Gastronomía local",
                "Experiencia cultural",
            ])),
            related_services: Some(vec![5]),
            social_links: Some(social(
                "+50373456794",
                "@festivalesuchioto",
                "FestivalesSuchitoto",
            )),
        },
    ]
}

/// The six businesses behind the showcase services.
pub fn businesses() -> Vec<Business> {
    vec![
        Business {
            id: 1,
            name: "Hoteles Volcán El Salvador".to_string(),
            category: "hotel".to_string(),
            logo: "HV".to_string(),
            cover_image: "/volcano-view-hotel.jpg".to_string(),
            rating: 4.9,
            reviews: 127,
            description:
                "Cadena hotelera con las mejores vistas volcánicas de El Salvador. Experiencia premium con todos los servicios."
                    .to_string(),
            location: "Santa Ana, El Salvador".to_string(),
            services: vec![1],
            social_links: social_with_phone(
                "+50373456789",
                "@hotelvolcan",
                "HotelsVolcan",
                "+50324567890",
            ),
        },
        Business {
            id: 2,
            name: "Escuela Surf Tunco".to_string(),
            category: "surf".to_string(),
            logo: "ST".to_string(),
            cover_image: "/surfing-beach.jpg".to_string(),
            rating: 4.8,
            reviews: 89,
            description:
                "Escuela de surf con instructores certificados internacionalmente. Clases para principiantes hasta avanzados."
                    .to_string(),
            location: "El Tunco, El Salvador".to_string(),
            services: vec![2],
            social_links: social_with_phone(
                "+50373456790",
                "@surftunco",
                "SurfTuncoElSalvador",
                "+50324567891",
            ),
        },
        Business {
            id: 3,
            name: "Cafeterías Ataco Exclusivo".to_string(),
            category: "cafe".to_string(),
            logo: "CA".to_string(),
            cover_image: "/coffee-plantation.jpg".to_string(),
            rating: 5.0,
            reviews: 64,
            description:
                "Café gourmet de las mejores plantaciones de El Salvador. Tours educativos y degustaciones premium."
                    .to_string(),
            location: "Ataco, El Salvador".to_string(),
            services: vec![3],
            social_links: social_with_phone(
                "+50373456791",
                "@cafeatacoelsalvador",
                "CafeteríasAtaco",
                "+50324567892",
            ),
        },
        Business {
            id: 4,
            name: "Ecoturismo Salvadoreño".to_string(),
            category: "eco".to_string(),
            logo: "ES".to_string(),
            cover_image: "/rainforest-hiking.jpg".to_string(),
            rating: 4.7,
            reviews: 156,
            description:
                "Operador turístico especializado en aventura y naturaleza. Rutas diseñadas para conservación ambiental."
                    .to_string(),
            location: "Ahuachapán, El Salvador".to_string(),
            services: vec![4],
            social_links: social_with_phone(
                "+50373456792",
                "@ecoturismosalvador",
                "EcoturismoSalvadoreno",
                "+50324567893",
            ),
        },
        Business {
            id: 5,
            name: "Pupusería La Abuela".to_string(),
            category: "food".to_string(),
            logo: "PA".to_string(),
            cover_image: "/traditional-pupusas.jpg".to_string(),
            rating: 4.9,
            reviews: 312,
            description:
                "Tradición culinaria salvadoreña desde 1975. Las mejores pupusas con receta auténtica.".to_string(),
            location: "San Salvador, El Salvador".to_string(),
            services: vec![5],
            social_links: social_with_phone(
                "+50373456793",
                "@pupuseriaabuela",
                "PupuseriaLaAbuela",
                "+50324567894",
            ),
        },
        Business {
            id: 6,
            name: "Eventos Culturales Suchitoto".to_string(),
            category: "events".to_string(),
            logo: "EC".to_string(),
            cover_image: "/cultural-festival.jpg".to_string(),
            rating: 4.6,
            reviews: 78,
            description:
                "Promotora de eventos y experiencias culturales. Celebramos la identidad salvadoreña.".to_string(),
            location: "Suchitoto, El Salvador".to_string(),
            services: vec![6],
            social_links: social_with_phone(
                "+50373456794",
                "@festivalesuchioto",
                "FestivalesSuchitoto",
                "+50324567895",
            ),
        },
    ]
}

/// Two showcase pools: one still open, one fully paid with issued QR
/// tokens.
pub fn pools() -> Vec<Pool> {
    let now = util::now_millis();
    vec![
        Pool {
            id: 1,
            service_name: "Hotel Vista al Volcán".to_string(),
            service_id: 1,
            location: "Santa Ana".to_string(),
            image: "/volcano-view-hotel.jpg".to_string(),
            leader: PoolLeader {
                name: "María G.".to_string(),
                avatar: "MG".to_string(),
            },
            current_members: 3,
            target_members: 4,
            total_price: 340.0,
            price_per_member: Some(85.0),
            deadline: "2h 30m".to_string(),
            status: PoolStatus::Abierto,
            members: vec![
                member("María G.", "MG", true),
                member("Carlos R.", "CR", true),
                member("Ana L.", "AL", false),
            ],
            payments: Vec::new(),
            qr_codes: None,
            created_at: now,
        },
        Pool {
            id: 2,
            service_name: "Surf Experience El Tunco".to_string(),
            service_id: 2,
            location: "El Tunco".to_string(),
            image: "/surfing-beach.jpg".to_string(),
            leader: PoolLeader {
                name: "José P.".to_string(),
                avatar: "JP".to_string(),
            },
            current_members: 5,
            target_members: 5,
            total_price: 225.0,
            price_per_member: Some(45.0),
            deadline: "Cerrado".to_string(),
            status: PoolStatus::Pagado,
            members: vec![
                member("José P.", "JP", true),
                member("Luis M.", "LM", true),
                member("Sofia T.", "ST", true),
                member("Diego V.", "DV", true),
                member("Elena R.", "ER", true),
            ],
            payments: vec![
                paid_payment("1", "José P.", 45.0, now),
                paid_payment("2", "Luis M.", 45.0, now),
                paid_payment("3", "Sofia T.", 45.0, now),
                paid_payment("4", "Diego V.", 45.0, now),
                paid_payment("5", "Elena R.", 45.0, now),
            ],
            qr_codes: Some(HashMap::from([
                ("José P.".to_string(), "QR-2-0-COMPLETE".to_string()),
                ("Luis M.".to_string(), "QR-2-1-COMPLETE".to_string()),
                ("Sofia T.".to_string(), "QR-2-2-COMPLETE".to_string()),
                ("Diego V.".to_string(), "QR-2-3-COMPLETE".to_string()),
                ("Elena R.".to_string(), "QR-2-4-COMPLETE".to_string()),
            ])),
            created_at: now,
        },
    ]
}

/// The curated tourist routes.
pub fn routes() -> Vec<Route> {
    vec![Route {
        id: 1,
        name: "Ruta del Sol".to_string(),
        path_svg: "M10 10 L100 100 L200 50 L300 150".to_string(),
        color_hex: "#F59E0B".to_string(),
        stops: vec![
            RouteStop {
                latitude: 13.6843,
                longitude: -89.2191,
                order: 1,
            },
            RouteStop {
                latitude: 13.7339,
                longitude: -89.2191,
                order: 2,
            },
        ],
    }]
}

/// Default stored cards: a default Visa and a secondary Mastercard.
pub fn payment_methods() -> Vec<PaymentMethod> {
    vec![
        PaymentMethod {
            id: "1".to_string(),
            kind: "Visa".to_string(),
            last4: "4242".to_string(),
            is_default: true,
        },
        PaymentMethod {
            id: "2".to_string(),
            kind: "Mastercard".to_string(),
            last4: "5555".to_string(),
            is_default: false,
        },
    ]
}

/// The demo identity every session starts as.
pub fn current_user() -> CurrentUser {
    CurrentUser {
        name: "Juan D.".to_string(),
        avatar: "JD".to_string(),
    }
}
