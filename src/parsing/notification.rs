//! System notification detection.
//!
//! Notifications have no `Author: ` prefix. Every phrase is anchored so the
//! actor's name cannot contain a colon, which keeps ordinary messages such
//! as `Alice: I added milk` from being mistaken for `Alice added Bob`.

use std::sync::LazyLock;

use regex::RegexSet;

const PHRASES: &[&str] = &[
    // English
    r"^Messages and calls are end-to-end encrypted",
    r"^Messages to this group are now secured",
    r"^[^:]+ created (?:group|this group)",
    r"^[^:]+ added ",
    r"^[^:]+ removed ",
    r"^[^:]+ left$",
    r"^[^:]+ joined using this group's invite link",
    r"^[^:]+ joined from the community",
    r"^[^:]+ changed (?:the subject|this group's icon|the group description|this group's description|the group name|their phone number|the group settings|this group's settings|the settings|to \+?\d)",
    r"^[^:]+ deleted (?:this group's icon|the group description)",
    r"^[^:]+ turned (?:on|off) (?:disappearing messages|admin approval)",
    r"^[^:]+ reset this group's invite link",
    r"^[^:]+ requested to join",
    r"^[^:]+ (?:is|are) now an admin",
    r"^You're (?:now|no longer) an admin",
    r"^Your security code with [^:]+ changed",
    r"^[^:]+'s security code changed",
    r"^[^:]+ pinned a message",
    // Russian
    r"^Сообщения и звонки защищены сквозным шифрованием",
    r"^[^:]+ создал\(а\) группу",
    r"^[^:]+ (?:добавил|удалил)(?:\(а\))? ",
    r"^[^:]+ (?:вышел|покинул)(?:\(а\))?",
    r"^[^:]+ изменил(?:\(а\))? (?:тему|иконку группы|описание группы|настройки)",
    r"^[^:]+ сбросил(?:\(а\))? ссылку-приглашение",
    r"^[^:]+ (?:включил|отключил|выключил)(?:\(а\))? (?:одобрение|исчезающие сообщения)",
];

static NOTIFICATIONS: LazyLock<RegexSet> = LazyLock::new(|| {
    RegexSet::new(PHRASES.iter().map(|p| format!("(?i){p}")))
        .expect("notification phrases are valid regexes")
});

/// Returns `true` if the text after a header is a system notification.
pub fn is_notification(text: &str) -> bool {
    NOTIFICATIONS.is_match(text.trim_end())
}
