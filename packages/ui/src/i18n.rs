//! Display languages and the static UI strings table.
//!
//! Arabic is the studio's primary language (and the only right-to-left
//! one); English and French are secondary. The selection is persisted in
//! `localStorage["language"]` and mirrored onto the document element's
//! `lang` and `dir` attributes.

use api::{ProjectType, RequestStatus};
use dioxus::prelude::*;

use crate::persist;

pub const LANGUAGE_STORAGE_KEY: &str = "language";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    Ar,
    En,
    Fr,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Ar, Language::En, Language::Fr];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Ar => "ar",
            Language::En => "en",
            Language::Fr => "fr",
        }
    }

    /// Stored value → language. Anything unrecognized falls back to Arabic.
    pub fn from_str(value: &str) -> Language {
        match value {
            "en" => Language::En,
            "fr" => Language::Fr,
            _ => Language::Ar,
        }
    }

    /// Text direction for the `dir` attribute.
    pub fn dir(&self) -> &'static str {
        match self {
            Language::Ar => "rtl",
            _ => "ltr",
        }
    }

    /// Native name shown in the language picker.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::Ar => "العربية",
            Language::En => "English",
            Language::Fr => "Français",
        }
    }
}

pub type LanguageSignal = Signal<Language>;

/// Get the language signal provided at the application root.
pub fn use_language() -> LanguageSignal {
    use_context::<LanguageSignal>()
}

/// Read the persisted language choice, defaulting to Arabic.
pub fn load_language_from_storage() -> Language {
    persist::get(LANGUAGE_STORAGE_KEY)
        .map(|v| Language::from_str(&v))
        .unwrap_or_default()
}

/// Persist a language choice and reflect it on the document element.
pub fn apply_language(lang: Language) {
    persist::set(LANGUAGE_STORAGE_KEY, lang.as_str());

    #[cfg(target_arch = "wasm32")]
    {
        if let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = root.set_attribute("lang", lang.as_str());
            let _ = root.set_attribute("dir", lang.dir());
        }
    }
}

/// Localized label for a service category.
pub fn project_type_label(lang: Language, t: ProjectType) -> &'static str {
    match lang {
        Language::Ar => t.label_ar(),
        Language::En => match t {
            ProjectType::VoiceAgencies => "Voice agency artwork",
            ProjectType::Logo => "Logo design",
            ProjectType::Branding => "Brand identity",
            ProjectType::WebDesign => "UI/UX web design",
            ProjectType::SocialMedia => "Social media designs",
            ProjectType::VideoEditing => "Video editing",
            ProjectType::Other => "Other",
        },
        Language::Fr => match t {
            ProjectType::VoiceAgencies => "Visuels d'agences vocales",
            ProjectType::Logo => "Création de logo",
            ProjectType::Branding => "Identité visuelle",
            ProjectType::WebDesign => "Design web UI/UX",
            ProjectType::SocialMedia => "Designs réseaux sociaux",
            ProjectType::VideoEditing => "Montage vidéo",
            ProjectType::Other => "Autre",
        },
    }
}

/// Localized label for a request status.
pub fn status_label(lang: Language, status: RequestStatus) -> &'static str {
    let s = strings(lang);
    match status {
        RequestStatus::Pending => s.status_pending,
        RequestStatus::InProgress => s.status_in_progress,
        RequestStatus::Completed => s.status_completed,
        RequestStatus::Rejected => s.status_rejected,
    }
}

/// Every user-visible string of the application, per language.
#[derive(Debug)]
pub struct Strings {
    // Navbar
    pub nav_home: &'static str,
    pub nav_contact: &'static str,
    pub nav_dashboard: &'static str,
    pub nav_admin: &'static str,
    pub nav_messages: &'static str,
    pub nav_support: &'static str,
    pub nav_login: &'static str,
    pub nav_register: &'static str,
    pub nav_logout: &'static str,
    pub nav_new_request: &'static str,

    // Hero / services
    pub hero_badge: &'static str,
    pub hero_intro: &'static str,
    pub hero_cta_start: &'static str,
    pub services_title: &'static str,
    pub services_sub: &'static str,
    pub svc_voice_title: &'static str,
    pub svc_voice_desc: &'static str,
    pub svc_brand_title: &'static str,
    pub svc_brand_desc: &'static str,
    pub svc_web_title: &'static str,
    pub svc_web_desc: &'static str,
    pub svc_social_title: &'static str,
    pub svc_social_desc: &'static str,
    pub svc_video_title: &'static str,
    pub svc_video_desc: &'static str,

    // Auth
    pub auth_login_title: &'static str,
    pub auth_login_sub: &'static str,
    pub auth_register_title: &'static str,
    pub auth_register_sub: &'static str,
    pub auth_name: &'static str,
    pub auth_email: &'static str,
    pub auth_password: &'static str,
    pub auth_login_action: &'static str,
    pub auth_register_action: &'static str,
    pub auth_switch_to_register: &'static str,
    pub auth_switch_to_login: &'static str,

    // Request form
    pub form_title: &'static str,
    pub form_sub_guest: &'static str,
    pub form_greeting: &'static str,
    pub form_client_name: &'static str,
    pub form_email: &'static str,
    pub form_project_type: &'static str,
    pub form_description: &'static str,
    pub form_desc_ph: &'static str,
    pub form_enhance: &'static str,
    pub form_enhance_hint: &'static str,
    pub form_enhance_min: &'static str,
    pub form_budget: &'static str,
    pub form_budget_ph: &'static str,
    pub form_submit: &'static str,
    pub form_cancel: &'static str,

    // User dashboard
    pub dash_requests_tab: &'static str,
    pub dash_profile_tab: &'static str,
    pub dash_requests_title: &'static str,
    pub dash_profile_title: &'static str,
    pub dash_member_since: &'static str,
    pub dash_no_requests: &'static str,
    pub dash_no_requests_sub: &'static str,
    pub dash_request_date: &'static str,
    pub dash_budget: &'static str,
    pub dash_save: &'static str,
    pub dash_saved: &'static str,

    // Admin dashboard
    pub admin_panel: &'static str,
    pub admin_tab_requests: &'static str,
    pub admin_tab_users: &'static str,
    pub admin_tab_banners: &'static str,
    pub admin_tab_messages: &'static str,
    pub admin_stat_users: &'static str,
    pub admin_stat_requests: &'static str,
    pub admin_stat_messages: &'static str,
    pub admin_stat_banners: &'static str,
    pub admin_requests_title: &'static str,
    pub admin_users_title: &'static str,
    pub admin_banners_title: &'static str,
    pub admin_messages_title: &'static str,
    pub admin_no_requests: &'static str,
    pub admin_no_banners: &'static str,
    pub admin_col_client: &'static str,
    pub admin_col_type: &'static str,
    pub admin_col_desc: &'static str,
    pub admin_col_status: &'static str,
    pub admin_col_actions: &'static str,
    pub admin_add_banner: &'static str,
    pub admin_banner_title_ph: &'static str,
    pub admin_pick_image: &'static str,
    pub admin_publish: &'static str,
    pub admin_uploading: &'static str,
    pub admin_active: &'static str,
    pub admin_inactive: &'static str,
    pub admin_banned: &'static str,
    pub admin_badge: &'static str,
    pub admin_confirm_delete_user: &'static str,
    pub admin_confirm_ban: &'static str,
    pub admin_confirm_unban: &'static str,
    pub admin_confirm_delete_banner: &'static str,

    // Contact
    pub contact_title: &'static str,
    pub contact_sub: &'static str,
    pub contact_call: &'static str,
    pub contact_email: &'static str,
    pub contact_address: &'static str,
    pub contact_name_ph: &'static str,
    pub contact_phone_ph: &'static str,
    pub contact_message_ph: &'static str,
    pub contact_send: &'static str,
    pub contact_sent: &'static str,

    // Notifications
    pub msgs_title: &'static str,
    pub msgs_empty: &'static str,

    // Live support
    pub support_title: &'static str,
    pub support_sub: &'static str,
    pub support_ph: &'static str,
    pub support_send: &'static str,
    pub support_empty: &'static str,

    // Success
    pub success_title: &'static str,
    pub success_desc: &'static str,
    pub success_track: &'static str,
    pub success_new_request: &'static str,

    // Footer
    pub footer_tagline: &'static str,
    pub footer_rights: &'static str,

    // Statuses
    pub status_pending: &'static str,
    pub status_in_progress: &'static str,
    pub status_completed: &'static str,
    pub status_rejected: &'static str,

    pub common_loading: &'static str,
}

pub fn strings(lang: Language) -> &'static Strings {
    match lang {
        Language::Ar => &AR,
        Language::En => &EN,
        Language::Fr => &FR,
    }
}

static AR: Strings = Strings {
    nav_home: "الرئيسية",
    nav_contact: "تواصل معنا",
    nav_dashboard: "لوحة التحكم",
    nav_admin: "لوحة المدير",
    nav_messages: "الإشعارات",
    nav_support: "الدعم المباشر",
    nav_login: "تسجيل الدخول",
    nav_register: "إنشاء حساب",
    nav_logout: "تسجيل الخروج",
    nav_new_request: "طلب جديد",

    hero_badge: "تصاميم من عالم آخر مدعومة بالذكاء الاصطناعي",
    hero_intro: "مرحباً بك في فليكس ديزاين. نأخذ أفكارك إلى بُعد جديد حيث يلتقي الفن بالتكنولوجيا لنخلق لك تجربة بصرية تسحر العيون.",
    hero_cta_start: "ابدأ رحلتك الآن",
    services_title: "خدماتنا الإبداعية",
    services_sub: "في فليكس ديزاين، لا نقدم مجرد تصاميم، بل نصنع تجارب بصرية متكاملة تروي قصة علامتك التجارية.",
    svc_voice_title: "وكالات وبرامج صوتية",
    svc_voice_desc: "نصمم شعارات الوكالات، إطارات الإدارات، وشارات التميز لجميع برامج الدردشة الصوتية باحترافية وأفكار حصرية.",
    svc_brand_title: "هوية بصرية وشعارات",
    svc_brand_desc: "نصمم شعارات فريدة وهويات بصرية متكاملة تعكس جوهر علامتك التجارية وترسخ في أذهان عملائك.",
    svc_web_title: "واجهات وتجربة مستخدم",
    svc_web_desc: "نصمم واجهات مواقع وتطبيقات تجمع بين الجمالية وسهولة الاستخدام لتوفير تجربة رقمية استثنائية.",
    svc_social_title: "تصاميم سوشيال ميديا",
    svc_social_desc: "نبتكر محتوى بصري جذاب لمنصات التواصل الاجتماعي يساعد في زيادة التفاعل والوصول لجمهورك.",
    svc_video_title: "موشن جرافيك ومونتاج",
    svc_video_desc: "نحول الأفكار الجامدة إلى فيديوهات متحركة مبهرة توصل رسالتك بشكل ديناميكي ومؤثر.",

    auth_login_title: "تسجيل الدخول",
    auth_login_sub: "مرحباً بك مجدداً في عالم فليكس",
    auth_register_title: "إنشاء حساب جديد",
    auth_register_sub: "انضم إلينا وابدأ رحلة تصميم مشاريعك",
    auth_name: "الاسم",
    auth_email: "البريد الإلكتروني",
    auth_password: "كلمة المرور",
    auth_login_action: "دخول",
    auth_register_action: "تسجيل",
    auth_switch_to_register: "ليس لديك حساب؟ سجل الآن",
    auth_switch_to_login: "لديك حساب بالفعل؟ تسجيل الدخول",

    form_title: "طلب تصميم جديد",
    form_sub_guest: "أدخل تفاصيل مشروعك وسنقوم بالرد عليك في أقرب وقت.",
    form_greeting: "مرحباً",
    form_client_name: "الاسم الكامل",
    form_email: "البريد الإلكتروني",
    form_project_type: "نوع المشروع",
    form_description: "تفاصيل المشروع",
    form_desc_ph: "صف مشروعك هنا... ما هي الفكرة؟ ما هي الألوان المفضلة؟",
    form_enhance: "تحسين الوصف بالذكاء الاصطناعي",
    form_enhance_hint: "نصيحة: يمكنك كتابة فكرة بسيطة والضغط على \"تحسين الوصف\" ليقوم المساعد بصياغتها بشكل احترافي.",
    form_enhance_min: "الرجاء كتابة وصف أولي (10 أحرف على الأقل) قبل طلب المساعدة.",
    form_budget: "الميزانية المتوقعة (اختياري)",
    form_budget_ph: "مثال: 500$ - 1000$",
    form_submit: "إرسال الطلب",
    form_cancel: "إلغاء",

    dash_requests_tab: "طلباتي",
    dash_profile_tab: "الملف الشخصي",
    dash_requests_title: "سجل الطلبات",
    dash_profile_title: "تعديل الملف الشخصي",
    dash_member_since: "عضو منذ",
    dash_no_requests: "لا توجد طلبات حتى الآن",
    dash_no_requests_sub: "ابدأ مشروعك الأول معنا اليوم",
    dash_request_date: "تاريخ الطلب:",
    dash_budget: "الميزانية:",
    dash_save: "حفظ التغييرات",
    dash_saved: "تم تحديث المعلومات بنجاح",

    admin_panel: "لوحة المدير",
    admin_tab_requests: "كل الطلبات",
    admin_tab_users: "المستخدمين",
    admin_tab_banners: "إدارة البنرات",
    admin_tab_messages: "الرسائل",
    admin_stat_users: "المستخدمين",
    admin_stat_requests: "الطلبات",
    admin_stat_messages: "الرسائل",
    admin_stat_banners: "البنرات النشطة",
    admin_requests_title: "إدارة الطلبات الواردة",
    admin_users_title: "المستخدمين المسجلين",
    admin_banners_title: "إدارة بنرات الإعلانات",
    admin_messages_title: "رسائل العملاء",
    admin_no_requests: "لا توجد طلبات لعرضها",
    admin_no_banners: "لا توجد بنرات حالياً",
    admin_col_client: "العميل",
    admin_col_type: "نوع المشروع",
    admin_col_desc: "الوصف",
    admin_col_status: "الحالة",
    admin_col_actions: "إجراءات",
    admin_add_banner: "إضافة بنر جديد",
    admin_banner_title_ph: "عنوان البنر",
    admin_pick_image: "اضغط لرفع صورة من الجهاز",
    admin_publish: "نشر البنر",
    admin_uploading: "جاري الرفع...",
    admin_active: "نشط",
    admin_inactive: "غير نشط",
    admin_banned: "محظور",
    admin_badge: "مدير",
    admin_confirm_delete_user: "هل أنت متأكد من حذف هذا المستخدم؟ هذا الإجراء لا يمكن التراجع عنه.",
    admin_confirm_ban: "هل أنت متأكد من حظر هذا المستخدم؟",
    admin_confirm_unban: "هل أنت متأكد من فك حظر هذا المستخدم؟",
    admin_confirm_delete_banner: "حذف هذا البنر؟",

    contact_title: "تواصل معنا",
    contact_sub: "نحن هنا للإجابة على استفساراتك وتحويل أفكارك إلى واقع. لا تتردد في الاتصال بنا.",
    contact_call: "اتصل بنا الآن",
    contact_email: "البريد الإلكتروني",
    contact_address: "المقر الرئيسي",
    contact_name_ph: "الاسم",
    contact_phone_ph: "رقم الهاتف",
    contact_message_ph: "رسالتك...",
    contact_send: "إرسال",
    contact_sent: "تم إرسال رسالتك بنجاح، سنتواصل معك قريباً.",

    msgs_title: "الإشعارات",
    msgs_empty: "لا توجد إشعارات بعد.",

    support_title: "الدعم المباشر",
    support_sub: "فريقنا جاهز لمساعدتك",
    support_ph: "اكتب رسالتك...",
    support_send: "إرسال",
    support_empty: "ابدأ المحادثة وسيرد عليك فريقنا في أقرب وقت.",

    success_title: "تم استلام طلبك!",
    success_desc: "شكراً لثقتك بنا. سيقوم فريقنا بمراجعة طلبك والتواصل معك قريباً.",
    success_track: "يمكنك متابعة حالة الطلب من لوحة التحكم.",
    success_new_request: "طلب جديد",

    footer_tagline: "نصنع تجارب بصرية تروي قصة علامتك التجارية.",
    footer_rights: "جميع الحقوق محفوظة",

    status_pending: "قيد المراجعة",
    status_in_progress: "جاري العمل",
    status_completed: "مكتمل",
    status_rejected: "مرفوض",

    common_loading: "جاري التحميل...",
};

static EN: Strings = Strings {
    nav_home: "Home",
    nav_contact: "Contact",
    nav_dashboard: "Dashboard",
    nav_admin: "Admin panel",
    nav_messages: "Notifications",
    nav_support: "Live support",
    nav_login: "Sign in",
    nav_register: "Sign up",
    nav_logout: "Sign out",
    nav_new_request: "New request",

    hero_badge: "Otherworldly designs, powered by AI",
    hero_intro: "Welcome to Flex Design. We take your ideas to a new dimension where art meets technology to craft visuals that enchant the eye.",
    hero_cta_start: "Start your journey",
    services_title: "Our creative services",
    services_sub: "At Flex Design we don't just deliver artwork — we build complete visual experiences that tell your brand's story.",
    svc_voice_title: "Voice agencies & shows",
    svc_voice_desc: "Agency logos, admin frames and achievement badges for every voice chat platform, crafted with exclusive ideas.",
    svc_brand_title: "Branding & logos",
    svc_brand_desc: "Distinctive logos and complete visual identities that capture your brand's essence and stick in your clients' minds.",
    svc_web_title: "UI & user experience",
    svc_web_desc: "Website and app interfaces that pair beauty with usability for an exceptional digital experience.",
    svc_social_title: "Social media designs",
    svc_social_desc: "Engaging visual content for social platforms that grows your reach and interaction.",
    svc_video_title: "Motion graphics & editing",
    svc_video_desc: "We turn static ideas into striking motion pieces that carry your message with impact.",

    auth_login_title: "Sign in",
    auth_login_sub: "Welcome back to the Flex universe",
    auth_register_title: "Create an account",
    auth_register_sub: "Join us and start designing your projects",
    auth_name: "Name",
    auth_email: "Email",
    auth_password: "Password",
    auth_login_action: "Sign in",
    auth_register_action: "Sign up",
    auth_switch_to_register: "No account yet? Register now",
    auth_switch_to_login: "Already have an account? Sign in",

    form_title: "New design request",
    form_sub_guest: "Tell us about your project and we'll get back to you shortly.",
    form_greeting: "Hello",
    form_client_name: "Full name",
    form_email: "Email",
    form_project_type: "Project type",
    form_description: "Project details",
    form_desc_ph: "Describe your project... What's the idea? Preferred colors?",
    form_enhance: "Enhance with AI",
    form_enhance_hint: "Tip: jot down a rough idea and press \"Enhance\" to have the assistant turn it into a professional brief.",
    form_enhance_min: "Please write an initial description (at least 10 characters) before asking for help.",
    form_budget: "Expected budget (optional)",
    form_budget_ph: "e.g. $500 - $1000",
    form_submit: "Submit request",
    form_cancel: "Cancel",

    dash_requests_tab: "My requests",
    dash_profile_tab: "Profile",
    dash_requests_title: "Request history",
    dash_profile_title: "Edit profile",
    dash_member_since: "Member since",
    dash_no_requests: "No requests yet",
    dash_no_requests_sub: "Start your first project with us today",
    dash_request_date: "Requested:",
    dash_budget: "Budget:",
    dash_save: "Save changes",
    dash_saved: "Profile updated successfully",

    admin_panel: "Admin panel",
    admin_tab_requests: "All requests",
    admin_tab_users: "Users",
    admin_tab_banners: "Banners",
    admin_tab_messages: "Messages",
    admin_stat_users: "Users",
    admin_stat_requests: "Requests",
    admin_stat_messages: "Messages",
    admin_stat_banners: "Active banners",
    admin_requests_title: "Incoming requests",
    admin_users_title: "Registered users",
    admin_banners_title: "Promotional banners",
    admin_messages_title: "Client messages",
    admin_no_requests: "No requests to show",
    admin_no_banners: "No banners yet",
    admin_col_client: "Client",
    admin_col_type: "Project type",
    admin_col_desc: "Description",
    admin_col_status: "Status",
    admin_col_actions: "Actions",
    admin_add_banner: "Add a banner",
    admin_banner_title_ph: "Banner title",
    admin_pick_image: "Click to upload an image",
    admin_publish: "Publish banner",
    admin_uploading: "Uploading...",
    admin_active: "Active",
    admin_inactive: "Inactive",
    admin_banned: "Banned",
    admin_badge: "Admin",
    admin_confirm_delete_user: "Delete this user? This cannot be undone.",
    admin_confirm_ban: "Ban this user?",
    admin_confirm_unban: "Unban this user?",
    admin_confirm_delete_banner: "Delete this banner?",

    contact_title: "Contact us",
    contact_sub: "We're here to answer your questions and turn your ideas into reality. Don't hesitate to reach out.",
    contact_call: "Call us now",
    contact_email: "Email",
    contact_address: "Head office",
    contact_name_ph: "Name",
    contact_phone_ph: "Phone number",
    contact_message_ph: "Your message...",
    contact_send: "Send",
    contact_sent: "Your message was sent — we'll be in touch soon.",

    msgs_title: "Notifications",
    msgs_empty: "No notifications yet.",

    support_title: "Live support",
    support_sub: "Our team is ready to help",
    support_ph: "Type a message...",
    support_send: "Send",
    support_empty: "Start the conversation and our team will reply shortly.",

    success_title: "Request received!",
    success_desc: "Thanks for your trust. Our team will review your request and contact you soon.",
    success_track: "You can track its status from your dashboard.",
    success_new_request: "New request",

    footer_tagline: "Building visual experiences that tell your brand's story.",
    footer_rights: "All rights reserved",

    status_pending: "Pending review",
    status_in_progress: "In progress",
    status_completed: "Completed",
    status_rejected: "Rejected",

    common_loading: "Loading...",
};

static FR: Strings = Strings {
    nav_home: "Accueil",
    nav_contact: "Contact",
    nav_dashboard: "Tableau de bord",
    nav_admin: "Panneau admin",
    nav_messages: "Notifications",
    nav_support: "Support en direct",
    nav_login: "Connexion",
    nav_register: "Inscription",
    nav_logout: "Déconnexion",
    nav_new_request: "Nouvelle demande",

    hero_badge: "Des designs d'un autre monde, propulsés par l'IA",
    hero_intro: "Bienvenue chez Flex Design. Nous emmenons vos idées dans une nouvelle dimension où l'art rencontre la technologie.",
    hero_cta_start: "Commencez votre voyage",
    services_title: "Nos services créatifs",
    services_sub: "Chez Flex Design, nous ne livrons pas de simples visuels : nous construisons des expériences qui racontent votre marque.",
    svc_voice_title: "Agences et salons vocaux",
    svc_voice_desc: "Logos d'agences, cadres d'administration et badges de distinction pour toutes les plateformes de chat vocal.",
    svc_brand_title: "Identité visuelle et logos",
    svc_brand_desc: "Des logos uniques et des identités complètes qui reflètent l'essence de votre marque.",
    svc_web_title: "Interfaces et expérience utilisateur",
    svc_web_desc: "Des interfaces web et mobiles qui allient esthétique et simplicité d'usage.",
    svc_social_title: "Designs réseaux sociaux",
    svc_social_desc: "Du contenu visuel engageant pour vos plateformes sociales, pensé pour élargir votre audience.",
    svc_video_title: "Motion design et montage",
    svc_video_desc: "Nous transformons des idées statiques en vidéos animées percutantes.",

    auth_login_title: "Connexion",
    auth_login_sub: "Bon retour dans l'univers Flex",
    auth_register_title: "Créer un compte",
    auth_register_sub: "Rejoignez-nous et lancez vos projets de design",
    auth_name: "Nom",
    auth_email: "E-mail",
    auth_password: "Mot de passe",
    auth_login_action: "Se connecter",
    auth_register_action: "S'inscrire",
    auth_switch_to_register: "Pas de compte ? Inscrivez-vous",
    auth_switch_to_login: "Déjà un compte ? Connectez-vous",

    form_title: "Nouvelle demande de design",
    form_sub_guest: "Décrivez votre projet et nous vous répondrons rapidement.",
    form_greeting: "Bonjour",
    form_client_name: "Nom complet",
    form_email: "E-mail",
    form_project_type: "Type de projet",
    form_description: "Détails du projet",
    form_desc_ph: "Décrivez votre projet... L'idée ? Les couleurs préférées ?",
    form_enhance: "Améliorer avec l'IA",
    form_enhance_hint: "Astuce : notez une idée simple et cliquez sur « Améliorer » pour en faire un brief professionnel.",
    form_enhance_min: "Veuillez écrire une description initiale (au moins 10 caractères) avant de demander de l'aide.",
    form_budget: "Budget prévu (optionnel)",
    form_budget_ph: "ex. 500 $ - 1000 $",
    form_submit: "Envoyer la demande",
    form_cancel: "Annuler",

    dash_requests_tab: "Mes demandes",
    dash_profile_tab: "Profil",
    dash_requests_title: "Historique des demandes",
    dash_profile_title: "Modifier le profil",
    dash_member_since: "Membre depuis",
    dash_no_requests: "Aucune demande pour l'instant",
    dash_no_requests_sub: "Lancez votre premier projet avec nous aujourd'hui",
    dash_request_date: "Demandé le :",
    dash_budget: "Budget :",
    dash_save: "Enregistrer",
    dash_saved: "Profil mis à jour",

    admin_panel: "Panneau admin",
    admin_tab_requests: "Toutes les demandes",
    admin_tab_users: "Utilisateurs",
    admin_tab_banners: "Bannières",
    admin_tab_messages: "Messages",
    admin_stat_users: "Utilisateurs",
    admin_stat_requests: "Demandes",
    admin_stat_messages: "Messages",
    admin_stat_banners: "Bannières actives",
    admin_requests_title: "Demandes entrantes",
    admin_users_title: "Utilisateurs inscrits",
    admin_banners_title: "Bannières promotionnelles",
    admin_messages_title: "Messages des clients",
    admin_no_requests: "Aucune demande à afficher",
    admin_no_banners: "Aucune bannière pour l'instant",
    admin_col_client: "Client",
    admin_col_type: "Type de projet",
    admin_col_desc: "Description",
    admin_col_status: "Statut",
    admin_col_actions: "Actions",
    admin_add_banner: "Ajouter une bannière",
    admin_banner_title_ph: "Titre de la bannière",
    admin_pick_image: "Cliquez pour téléverser une image",
    admin_publish: "Publier la bannière",
    admin_uploading: "Téléversement...",
    admin_active: "Active",
    admin_inactive: "Inactive",
    admin_banned: "Banni",
    admin_badge: "Admin",
    admin_confirm_delete_user: "Supprimer cet utilisateur ? Cette action est irréversible.",
    admin_confirm_ban: "Bannir cet utilisateur ?",
    admin_confirm_unban: "Débannir cet utilisateur ?",
    admin_confirm_delete_banner: "Supprimer cette bannière ?",

    contact_title: "Contactez-nous",
    contact_sub: "Nous sommes là pour répondre à vos questions et donner vie à vos idées.",
    contact_call: "Appelez-nous",
    contact_email: "E-mail",
    contact_address: "Siège principal",
    contact_name_ph: "Nom",
    contact_phone_ph: "Numéro de téléphone",
    contact_message_ph: "Votre message...",
    contact_send: "Envoyer",
    contact_sent: "Votre message a bien été envoyé, nous vous recontacterons bientôt.",

    msgs_title: "Notifications",
    msgs_empty: "Aucune notification pour l'instant.",

    support_title: "Support en direct",
    support_sub: "Notre équipe est prête à vous aider",
    support_ph: "Écrivez un message...",
    support_send: "Envoyer",
    support_empty: "Démarrez la conversation, notre équipe vous répondra rapidement.",

    success_title: "Demande reçue !",
    success_desc: "Merci de votre confiance. Notre équipe examinera votre demande et vous contactera bientôt.",
    success_track: "Vous pouvez suivre son statut depuis votre tableau de bord.",
    success_new_request: "Nouvelle demande",

    footer_tagline: "Des expériences visuelles qui racontent votre marque.",
    footer_rights: "Tous droits réservés",

    status_pending: "En attente",
    status_in_progress: "En cours",
    status_completed: "Terminé",
    status_rejected: "Refusé",

    common_loading: "Chargement...",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_arabic_is_right_to_left() {
        assert_eq!(Language::Ar.dir(), "rtl");
        assert_eq!(Language::En.dir(), "ltr");
        assert_eq!(Language::Fr.dir(), "ltr");
    }

    #[test]
    fn unknown_stored_values_fall_back_to_arabic() {
        assert_eq!(Language::from_str("ar"), Language::Ar);
        assert_eq!(Language::from_str("de"), Language::Ar);
    }

    #[test]
    fn every_language_labels_every_category_and_status() {
        for lang in Language::ALL {
            for t in ProjectType::ALL {
                assert!(!project_type_label(lang, t).is_empty());
            }
            for s in [
                RequestStatus::Pending,
                RequestStatus::InProgress,
                RequestStatus::Completed,
                RequestStatus::Rejected,
            ] {
                assert!(!status_label(lang, s).is_empty());
            }
        }
    }

    #[test]
    fn core_navigation_strings_are_present() {
        for lang in Language::ALL {
            let s = strings(lang);
            for value in [
                s.nav_home,
                s.nav_contact,
                s.nav_dashboard,
                s.nav_login,
                s.nav_register,
                s.form_title,
                s.form_submit,
                s.contact_title,
                s.success_title,
            ] {
                assert!(!value.is_empty());
            }
        }
    }
}
