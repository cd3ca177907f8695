//! Share link builders
//!
//! Pool invites go out as deep links into WhatsApp, email and the
//! social networks. Pure string building, no network: the frontend
//! hands these URLs to the OS.

use shared::models::Pool;

/// Fixed subject line for pool invite emails.
const EMAIL_SUBJECT: &str = "Únete a mi Pool en Palenque Go";

/// A pool invitation: the canonical link plus the localized pitch
/// text, composed into per-channel share URLs.
#[derive(Debug, Clone)]
pub struct PoolInvite {
    pub link: String,
    pub text: String,
}

impl PoolInvite {
    /// Build the invite for a pool.
    pub fn new(share_base: &str, pool: &Pool) -> Self {
        let link = format!("{}/pool/{}", share_base.trim_end_matches('/'), pool.id);
        let spots = pool.spots_left();
        let plural = if spots == 1 { "" } else { "s" };
        let text = format!(
            "Únete a mi Pool en Palenque Go: \"{}\" por ${}. {} cupo{} disponible{}. ¡Ahorra con nosotros!",
            pool.service_name,
            pool.price_per_person(),
            spots,
            plural,
            plural,
        );
        Self { link, text }
    }

    /// Open WhatsApp with the invite prefilled.
    pub fn whatsapp(&self) -> String {
        let message = format!("{} {}", self.text, self.link);
        format!("https://wa.me/?text={}", urlencoding::encode(&message))
    }

    /// Message a specific contact on WhatsApp. Everything but digits
    /// is stripped from the phone number.
    pub fn whatsapp_contact(&self, phone: &str) -> String {
        let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
        let message = format!("{}\n\n{}", self.text, self.link);
        format!(
            "https://wa.me/{}?text={}",
            digits,
            urlencoding::encode(&message)
        )
    }

    /// Compose an email with the invite.
    pub fn email(&self) -> String {
        let body = format!("{}\n\n{}", self.text, self.link);
        format!(
            "mailto:?subject={}&body={}",
            urlencoding::encode(EMAIL_SUBJECT),
            urlencoding::encode(&body)
        )
    }

    /// Facebook share dialog.
    pub fn facebook(&self) -> String {
        format!(
            "https://www.facebook.com/sharer/sharer.php?u={}&quote={}",
            self.link,
            urlencoding::encode(&self.text)
        )
    }

    /// Twitter/X tweet intent.
    pub fn twitter(&self) -> String {
        format!(
            "https://twitter.com/intent/tweet?text={}&url={}",
            urlencoding::encode(&self.text),
            self.link
        )
    }

    /// LinkedIn share-offsite dialog.
    pub fn linkedin(&self) -> String {
        format!(
            "https://www.linkedin.com/sharing/share-offsite/?url={}",
            self.link
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_SHARE_BASE;
    use crate::seed;

    fn open_pool_invite() -> PoolInvite {
        let pools = seed::pools();
        PoolInvite::new(DEFAULT_SHARE_BASE, &pools[0])
    }

    #[test]
    fn test_invite_link_and_text() {
        let invite = open_pool_invite();
        assert_eq!(invite.link, "https://palenquego.app/pool/1");
        assert!(invite.text.contains("\"Hotel Vista al Volcán\" por $85."));
        // one spot left on the seeded open pool, singular form
        assert!(invite.text.contains("1 cupo disponible."));
    }

    #[test]
    fn test_plural_spots() {
        let mut pools = seed::pools();
        pools[0].current_members = 1;
        pools[0].members.truncate(1);
        let invite = PoolInvite::new(DEFAULT_SHARE_BASE, &pools[0]);
        assert!(invite.text.contains("3 cupos disponibles."));
    }

    #[test]
    fn test_whatsapp_url_is_escaped() {
        let invite = open_pool_invite();
        let url = invite.whatsapp();
        assert!(url.starts_with("https://wa.me/?text="));
        assert!(!url.contains(' '));
        assert!(!url.contains('"'));
        assert!(url.contains("%C3%9Anete%20a%20mi%20Pool"));
    }

    #[test]
    fn test_whatsapp_contact_keeps_digits_only() {
        let invite = open_pool_invite();
        let url = invite.whatsapp_contact("+503 7345-6789");
        assert!(url.starts_with("https://wa.me/50373456789?text="));
    }

    #[test]
    fn test_email_has_escaped_subject_and_body() {
        let invite = open_pool_invite();
        let url = invite.email();
        assert!(url.starts_with("mailto:?subject=%C3%9Anete%20a%20mi%20Pool"));
        assert!(url.contains("&body="));
        assert!(!url.contains(' '));
    }

    #[test]
    fn test_social_urls_carry_raw_link() {
        let invite = open_pool_invite();
        assert!(
            invite
                .facebook()
                .starts_with("https://www.facebook.com/sharer/sharer.php?u=https://palenquego.app/pool/1&quote=")
        );
        assert!(
            invite
                .twitter()
                .ends_with("&url=https://palenquego.app/pool/1")
        );
        assert_eq!(
            invite.linkedin(),
            "https://www.linkedin.com/sharing/share-offsite/?url=https://palenquego.app/pool/1"
        );
    }
}
