//! Static UI string dictionaries, one per supported language.
//!
//! Keys use dot notation grouped by screen area. English is the reference
//! dictionary; the others are expected to cover the same key set.

use super::Language;

/// Raw dictionary for one language.
pub(super) fn table(lang: Language) -> &'static [(&'static str, &'static str)] {
    match lang {
        Language::En => EN,
        Language::Ar => AR,
        Language::Fr => FR,
        Language::Es => ES,
        Language::De => DE,
        Language::It => IT,
        Language::Hi => HI,
    }
}

const EN: &[(&str, &str)] = &[
    ("nav.dashboard", "Dashboard"),
    ("nav.signals", "Signals"),
    ("nav.history", "History"),
    ("nav.settings", "Settings"),
    ("nav.admin", "Admin"),
    ("nav.login", "Login"),
    ("nav.logout", "Logout"),
    ("nav.getStarted", "Get Started"),
    ("language.english", "English"),
    ("language.arabic", "العربية"),
    ("language.french", "Français"),
    ("language.spanish", "Español"),
    ("language.german", "Deutsch"),
    ("language.italian", "Italiano"),
    ("language.hindi", "हिन्दी"),
    ("dashboard.title", "Trading Dashboard"),
    (
        "dashboard.subtitle",
        "Generate AI-powered trading signals and manage your account",
    ),
    ("dashboard.currentPlan", "Current Plan"),
    ("dashboard.signalsToday", "Signals Today"),
    ("dashboard.remaining", "Remaining"),
    ("dashboard.needMoreSignals", "Need More Signals?"),
    (
        "dashboard.upgradeDesc",
        "Upgrade to Pro or Elite for more daily signals and advanced features",
    ),
    ("dashboard.viewPlans", "View Plans"),
    ("signal.title", "Generate Trading Signal"),
    ("signal.tradingPair", "Trading Pair"),
    ("signal.tradingSchool", "Trading School"),
    ("signal.advancedSettings", "Advanced Settings"),
    ("signal.candleCount", "Candle Count"),
    ("signal.aiProvider", "AI Provider"),
    ("signal.generateSignal", "Generate Signal"),
    ("signal.fetchMarketData", "Fetch Market Data"),
    ("signal.marketDataReady", "Market Data Ready"),
    ("signal.demoData", "Demo Data"),
    ("signal.fetchingData", "Fetching Data..."),
    ("signal.analyzingMarket", "Analyzing Market..."),
    (
        "signal.dailyLimitReached",
        "Daily limit reached. Upgrade your plan for more signals.",
    ),
    ("market.symbol", "Symbol"),
    ("market.candles5min", "5min Candles"),
    ("market.candles15min", "15min Candles"),
    ("market.candles1h", "1h Candles"),
    ("market.candles4h", "4h Candles"),
    ("stats.accountType", "Account Type"),
    ("stats.dailyLimit", "Daily Limit"),
    ("stats.usedToday", "Used Today"),
    ("stats.selectedPair", "Selected Pair"),
    ("stats.dataSource", "Data Source"),
    ("stats.live", "Live"),
    ("stats.demo", "Demo"),
    ("api.connected", "API Connected"),
    ("api.disconnected", "API Disconnected"),
    ("api.checking", "Checking..."),
    ("api.demoDataUsed", "Demo data in use"),
    ("api.retry", "Retry"),
    ("error.apiNotConfigured", "API key not configured"),
    ("error.rateLimitReached", "Rate limit reached"),
    ("error.symbolNotFound", "Symbol not found"),
    ("error.marketDataUnavailable", "Market data unavailable"),
    ("common.loading", "Loading..."),
    ("common.save", "Save"),
    ("common.cancel", "Cancel"),
    ("common.delete", "Delete"),
    ("common.edit", "Edit"),
    ("common.close", "Close"),
    ("common.back", "Back"),
    ("common.next", "Next"),
    ("common.previous", "Previous"),
    ("common.search", "Search"),
    ("common.filter", "Filter"),
    ("common.export", "Export"),
    ("common.import", "Import"),
    ("common.refresh", "Refresh"),
];

const AR: &[(&str, &str)] = &[
    ("nav.dashboard", "لوحة التحكم"),
    ("nav.signals", "الإشارات"),
    ("nav.history", "التاريخ"),
    ("nav.settings", "الإعدادات"),
    ("nav.admin", "المدير"),
    ("nav.login", "تسجيل الدخول"),
    ("nav.logout", "تسجيل الخروج"),
    ("nav.getStarted", "ابدأ الآن"),
    ("language.english", "English"),
    ("language.arabic", "العربية"),
    ("language.french", "Français"),
    ("language.spanish", "Español"),
    ("language.german", "Deutsch"),
    ("language.italian", "Italiano"),
    ("language.hindi", "हिन्दी"),
    ("dashboard.title", "لوحة التداول"),
    (
        "dashboard.subtitle",
        "قم بتوليد إشارات التداول المدعومة بالذكاء الاصطناعي وإدارة حسابك",
    ),
    ("dashboard.currentPlan", "الخطة الحالية"),
    ("dashboard.signalsToday", "الإشارات اليوم"),
    ("dashboard.remaining", "المتبقي"),
    ("dashboard.needMoreSignals", "تحتاج المزيد من الإشارات؟"),
    (
        "dashboard.upgradeDesc",
        "ترقى إلى Pro أو Elite للحصول على المزيد من الإشارات اليومية والميزات المتقدمة",
    ),
    ("dashboard.viewPlans", "عرض الخطط"),
    ("signal.title", "توليد إشارة التداول"),
    ("signal.tradingPair", "زوج التداول"),
    ("signal.tradingSchool", "مدرسة التداول"),
    ("signal.advancedSettings", "الإعدادات المتقدمة"),
    ("signal.candleCount", "عدد الشموع"),
    ("signal.aiProvider", "مزود الذكاء الاصطناعي"),
    ("signal.generateSignal", "توليد الإشارة"),
    ("signal.fetchMarketData", "جلب بيانات السوق"),
    ("signal.marketDataReady", "بيانات السوق جاهزة"),
    ("signal.demoData", "بيانات تجريبية"),
    ("signal.fetchingData", "جلب البيانات..."),
    ("signal.analyzingMarket", "تحليل السوق..."),
    (
        "signal.dailyLimitReached",
        "تم الوصول للحد اليومي. ترقى خطتك للحصول على المزيد من الإشارات.",
    ),
    ("market.symbol", "الرمز"),
    ("market.candles5min", "شموع 5 دقائق"),
    ("market.candles15min", "شموع 15 دقيقة"),
    ("market.candles1h", "شموع ساعة"),
    ("market.candles4h", "شموع 4 ساعات"),
    ("stats.accountType", "نوع الحساب"),
    ("stats.dailyLimit", "الحد اليومي"),
    ("stats.usedToday", "المستخدم اليوم"),
    ("stats.selectedPair", "الزوج المختار"),
    ("stats.dataSource", "مصدر البيانات"),
    ("stats.live", "مباشر"),
    ("stats.demo", "تجريبي"),
    ("api.connected", "API متصل"),
    ("api.disconnected", "API منقطع"),
    ("api.checking", "فحص..."),
    ("api.demoDataUsed", "بيانات تجريبية قيد الاستخدام"),
    ("api.retry", "إعادة المحاولة"),
    ("error.apiNotConfigured", "مفتاح API غير مكون"),
    ("error.rateLimitReached", "تم الوصول لحد المعدل"),
    ("error.symbolNotFound", "الرمز غير موجود"),
    ("error.marketDataUnavailable", "بيانات السوق غير متاحة"),
    ("common.loading", "تحميل..."),
    ("common.save", "حفظ"),
    ("common.cancel", "إلغاء"),
    ("common.delete", "حذف"),
    ("common.edit", "تعديل"),
    ("common.close", "إغلاق"),
    ("common.back", "رجوع"),
    ("common.next", "التالي"),
    ("common.previous", "السابق"),
    ("common.search", "بحث"),
    ("common.filter", "تصفية"),
    ("common.export", "تصدير"),
    ("common.import", "استيراد"),
    ("common.refresh", "تحديث"),
];

const FR: &[(&str, &str)] = &[
    ("nav.dashboard", "Tableau de bord"),
    ("nav.signals", "Signaux"),
    ("nav.history", "Historique"),
    ("nav.settings", "Paramètres"),
    ("nav.admin", "Admin"),
    ("nav.login", "Connexion"),
    ("nav.logout", "Déconnexion"),
    ("nav.getStarted", "Commencer"),
    ("language.english", "English"),
    ("language.arabic", "العربية"),
    ("language.french", "Français"),
    ("language.spanish", "Español"),
    ("language.german", "Deutsch"),
    ("language.italian", "Italiano"),
    ("language.hindi", "हिन्दी"),
    ("dashboard.title", "Tableau de Bord Trading"),
    (
        "dashboard.subtitle",
        "Générez des signaux de trading alimentés par l'IA et gérez votre compte",
    ),
    ("dashboard.currentPlan", "Plan Actuel"),
    ("dashboard.signalsToday", "Signaux Aujourd'hui"),
    ("dashboard.remaining", "Restant"),
    ("dashboard.needMoreSignals", "Besoin de Plus de Signaux?"),
    (
        "dashboard.upgradeDesc",
        "Passez à Pro ou Elite pour plus de signaux quotidiens et des fonctionnalités avancées",
    ),
    ("dashboard.viewPlans", "Voir les Plans"),
    ("signal.title", "Générer Signal de Trading"),
    ("signal.tradingPair", "Paire de Trading"),
    ("signal.tradingSchool", "École de Trading"),
    ("signal.advancedSettings", "Paramètres Avancés"),
    ("signal.candleCount", "Nombre de Bougies"),
    ("signal.aiProvider", "Fournisseur IA"),
    ("signal.generateSignal", "Générer Signal"),
    ("signal.fetchMarketData", "Récupérer Données Marché"),
    ("signal.marketDataReady", "Données Marché Prêtes"),
    ("signal.demoData", "Données Démo"),
    ("signal.fetchingData", "Récupération des Données..."),
    ("signal.analyzingMarket", "Analyse du Marché..."),
    (
        "signal.dailyLimitReached",
        "Limite quotidienne atteinte. Mettez à niveau votre plan pour plus de signaux.",
    ),
    ("market.symbol", "Symbole"),
    ("market.candles5min", "Bougies 5min"),
    ("market.candles15min", "Bougies 15min"),
    ("market.candles1h", "Bougies 1h"),
    ("market.candles4h", "Bougies 4h"),
    ("stats.accountType", "Type de Compte"),
    ("stats.dailyLimit", "Limite Quotidienne"),
    ("stats.usedToday", "Utilisé Aujourd'hui"),
    ("stats.selectedPair", "Paire Sélectionnée"),
    ("stats.dataSource", "Source de Données"),
    ("stats.live", "En Direct"),
    ("stats.demo", "Démo"),
    ("api.connected", "API Connectée"),
    ("api.disconnected", "API Déconnectée"),
    ("api.checking", "Vérification..."),
    ("api.demoDataUsed", "Données démo en cours d'utilisation"),
    ("api.retry", "Réessayer"),
    ("error.apiNotConfigured", "Clé API non configurée"),
    ("error.rateLimitReached", "Limite de taux atteinte"),
    ("error.symbolNotFound", "Symbole non trouvé"),
    ("error.marketDataUnavailable", "Données de marché indisponibles"),
    ("common.loading", "Chargement..."),
    ("common.save", "Enregistrer"),
    ("common.cancel", "Annuler"),
    ("common.delete", "Supprimer"),
    ("common.edit", "Modifier"),
    ("common.close", "Fermer"),
    ("common.back", "Retour"),
    ("common.next", "Suivant"),
    ("common.previous", "Précédent"),
    ("common.search", "Rechercher"),
    ("common.filter", "Filtrer"),
    ("common.export", "Exporter"),
    ("common.import", "Importer"),
    ("common.refresh", "Actualiser"),
];

const ES: &[(&str, &str)] = &[
    ("nav.dashboard", "Panel de Control"),
    ("nav.signals", "Señales"),
    ("nav.history", "Historial"),
    ("nav.settings", "Configuración"),
    ("nav.admin", "Admin"),
    ("nav.login", "Iniciar Sesión"),
    ("nav.logout", "Cerrar Sesión"),
    ("nav.getStarted", "Comenzar"),
    ("language.english", "English"),
    ("language.arabic", "العربية"),
    ("language.french", "Français"),
    ("language.spanish", "Español"),
    ("language.german", "Deutsch"),
    ("language.italian", "Italiano"),
    ("language.hindi", "हिन्दी"),
    ("dashboard.title", "Panel de Trading"),
    (
        "dashboard.subtitle",
        "Genera señales de trading impulsadas por IA y gestiona tu cuenta",
    ),
    ("dashboard.currentPlan", "Plan Actual"),
    ("dashboard.signalsToday", "Señales Hoy"),
    ("dashboard.remaining", "Restante"),
    ("dashboard.needMoreSignals", "¿Necesitas Más Señales?"),
    (
        "dashboard.upgradeDesc",
        "Actualiza a Pro o Elite para más señales diarias y características avanzadas",
    ),
    ("dashboard.viewPlans", "Ver Planes"),
    ("signal.title", "Generar Señal de Trading"),
    ("signal.tradingPair", "Par de Trading"),
    ("signal.tradingSchool", "Escuela de Trading"),
    ("signal.advancedSettings", "Configuración Avanzada"),
    ("signal.candleCount", "Número de Velas"),
    ("signal.aiProvider", "Proveedor de IA"),
    ("signal.generateSignal", "Generar Señal"),
    ("signal.fetchMarketData", "Obtener Datos del Mercado"),
    ("signal.marketDataReady", "Datos del Mercado Listos"),
    ("signal.demoData", "Datos Demo"),
    ("signal.fetchingData", "Obteniendo Datos..."),
    ("signal.analyzingMarket", "Analizando Mercado..."),
    (
        "signal.dailyLimitReached",
        "Límite diario alcanzado. Actualiza tu plan para más señales.",
    ),
    ("market.symbol", "Símbolo"),
    ("market.candles5min", "Velas 5min"),
    ("market.candles15min", "Velas 15min"),
    ("market.candles1h", "Velas 1h"),
    ("market.candles4h", "Velas 4h"),
    ("stats.accountType", "Tipo de Cuenta"),
    ("stats.dailyLimit", "Límite Diario"),
    ("stats.usedToday", "Usado Hoy"),
    ("stats.selectedPair", "Par Seleccionado"),
    ("stats.dataSource", "Fuente de Datos"),
    ("stats.live", "En Vivo"),
    ("stats.demo", "Demo"),
    ("api.connected", "API Conectada"),
    ("api.disconnected", "API Desconectada"),
    ("api.checking", "Verificando..."),
    ("api.demoDataUsed", "Datos demo en uso"),
    ("api.retry", "Reintentar"),
    ("error.apiNotConfigured", "Clave API no configurada"),
    ("error.rateLimitReached", "Límite de velocidad alcanzado"),
    ("error.symbolNotFound", "Símbolo no encontrado"),
    ("error.marketDataUnavailable", "Datos de mercado no disponibles"),
    ("common.loading", "Cargando..."),
    ("common.save", "Guardar"),
    ("common.cancel", "Cancelar"),
    ("common.delete", "Eliminar"),
    ("common.edit", "Editar"),
    ("common.close", "Cerrar"),
    ("common.back", "Atrás"),
    ("common.next", "Siguiente"),
    ("common.previous", "Anterior"),
    ("common.search", "Buscar"),
    ("common.filter", "Filtrar"),
    ("common.export", "Exportar"),
    ("common.import", "Importar"),
    ("common.refresh", "Actualizar"),
];

const DE: &[(&str, &str)] = &[
    ("nav.dashboard", "Dashboard"),
    ("nav.signals", "Signale"),
    ("nav.history", "Verlauf"),
    ("nav.settings", "Einstellungen"),
    ("nav.admin", "Admin"),
    ("nav.login", "Anmelden"),
    ("nav.logout", "Abmelden"),
    ("nav.getStarted", "Loslegen"),
    ("language.english", "English"),
    ("language.arabic", "العربية"),
    ("language.french", "Français"),
    ("language.spanish", "Español"),
    ("language.german", "Deutsch"),
    ("language.italian", "Italiano"),
    ("language.hindi", "हिन्दी"),
    ("dashboard.title", "Trading Dashboard"),
    (
        "dashboard.subtitle",
        "Generieren Sie KI-gestützte Trading-Signale und verwalten Sie Ihr Konto",
    ),
    ("dashboard.currentPlan", "Aktueller Plan"),
    ("dashboard.signalsToday", "Signale Heute"),
    ("dashboard.remaining", "Verbleibend"),
    ("dashboard.needMoreSignals", "Benötigen Sie Mehr Signale?"),
    (
        "dashboard.upgradeDesc",
        "Upgraden Sie auf Pro oder Elite für mehr tägliche Signale und erweiterte Funktionen",
    ),
    ("dashboard.viewPlans", "Pläne Anzeigen"),
    ("signal.title", "Trading-Signal Generieren"),
    ("signal.tradingPair", "Trading-Paar"),
    ("signal.tradingSchool", "Trading-Schule"),
    ("signal.advancedSettings", "Erweiterte Einstellungen"),
    ("signal.candleCount", "Kerzen-Anzahl"),
    ("signal.aiProvider", "KI-Anbieter"),
    ("signal.generateSignal", "Signal Generieren"),
    ("signal.fetchMarketData", "Marktdaten Abrufen"),
    ("signal.marketDataReady", "Marktdaten Bereit"),
    ("signal.demoData", "Demo-Daten"),
    ("signal.fetchingData", "Daten Abrufen..."),
    ("signal.analyzingMarket", "Markt Analysieren..."),
    (
        "signal.dailyLimitReached",
        "Tageslimit erreicht. Upgraden Sie Ihren Plan für mehr Signale.",
    ),
    ("market.symbol", "Symbol"),
    ("market.candles5min", "5min Kerzen"),
    ("market.candles15min", "15min Kerzen"),
    ("market.candles1h", "1h Kerzen"),
    ("market.candles4h", "4h Kerzen"),
    ("stats.accountType", "Kontotyp"),
    ("stats.dailyLimit", "Tageslimit"),
    ("stats.usedToday", "Heute Verwendet"),
    ("stats.selectedPair", "Ausgewähltes Paar"),
    ("stats.dataSource", "Datenquelle"),
    ("stats.live", "Live"),
    ("stats.demo", "Demo"),
    ("api.connected", "API Verbunden"),
    ("api.disconnected", "API Getrennt"),
    ("api.checking", "Überprüfung..."),
    ("api.demoDataUsed", "Demo-Daten in Verwendung"),
    ("api.retry", "Wiederholen"),
    ("error.apiNotConfigured", "API-Schlüssel nicht konfiguriert"),
    ("error.rateLimitReached", "Rate-Limit erreicht"),
    ("error.symbolNotFound", "Symbol nicht gefunden"),
    ("error.marketDataUnavailable", "Marktdaten nicht verfügbar"),
    ("common.loading", "Laden..."),
    ("common.save", "Speichern"),
    ("common.cancel", "Abbrechen"),
    ("common.delete", "Löschen"),
    ("common.edit", "Bearbeiten"),
    ("common.close", "Schließen"),
    ("common.back", "Zurück"),
    ("common.next", "Weiter"),
    ("common.previous", "Vorherige"),
    ("common.search", "Suchen"),
    ("common.filter", "Filtern"),
    ("common.export", "Exportieren"),
    ("common.import", "Importieren"),
    ("common.refresh", "Aktualisieren"),
];

const IT: &[(&str, &str)] = &[
    ("nav.dashboard", "Dashboard"),
    ("nav.signals", "Segnali"),
    ("nav.history", "Cronologia"),
    ("nav.settings", "Impostazioni"),
    ("nav.admin", "Admin"),
    ("nav.login", "Accedi"),
    ("nav.logout", "Esci"),
    ("nav.getStarted", "Inizia"),
    ("language.english", "English"),
    ("language.arabic", "العربية"),
    ("language.french", "Français"),
    ("language.spanish", "Español"),
    ("language.german", "Deutsch"),
    ("language.italian", "Italiano"),
    ("language.hindi", "हिन्दी"),
    ("dashboard.title", "Dashboard Trading"),
    (
        "dashboard.subtitle",
        "Genera segnali di trading alimentati da AI e gestisci il tuo account",
    ),
    ("dashboard.currentPlan", "Piano Attuale"),
    ("dashboard.signalsToday", "Segnali Oggi"),
    ("dashboard.remaining", "Rimanenti"),
    ("dashboard.needMoreSignals", "Hai Bisogno di Più Segnali?"),
    (
        "dashboard.upgradeDesc",
        "Aggiorna a Pro o Elite per più segnali giornalieri e funzionalità avanzate",
    ),
    ("dashboard.viewPlans", "Visualizza Piani"),
    ("signal.title", "Genera Segnale di Trading"),
    ("signal.tradingPair", "Coppia di Trading"),
    ("signal.tradingSchool", "Scuola di Trading"),
    ("signal.advancedSettings", "Impostazioni Avanzate"),
    ("signal.candleCount", "Numero di Candele"),
    ("signal.aiProvider", "Provider AI"),
    ("signal.generateSignal", "Genera Segnale"),
    ("signal.fetchMarketData", "Recupera Dati di Mercato"),
    ("signal.marketDataReady", "Dati di Mercato Pronti"),
    ("signal.demoData", "Dati Demo"),
    ("signal.fetchingData", "Recupero Dati..."),
    ("signal.analyzingMarket", "Analisi Mercato..."),
    (
        "signal.dailyLimitReached",
        "Limite giornaliero raggiunto. Aggiorna il tuo piano per più segnali.",
    ),
    ("market.symbol", "Simbolo"),
    ("market.candles5min", "Candele 5min"),
    ("market.candles15min", "Candele 15min"),
    ("market.candles1h", "Candele 1h"),
    ("market.candles4h", "Candele 4h"),
    ("stats.accountType", "Tipo di Account"),
    ("stats.dailyLimit", "Limite Giornaliero"),
    ("stats.usedToday", "Usato Oggi"),
    ("stats.selectedPair", "Coppia Selezionata"),
    ("stats.dataSource", "Fonte Dati"),
    ("stats.live", "Live"),
    ("stats.demo", "Demo"),
    ("api.connected", "API Connessa"),
    ("api.disconnected", "API Disconnessa"),
    ("api.checking", "Controllo..."),
    ("api.demoDataUsed", "Dati demo in uso"),
    ("api.retry", "Riprova"),
    ("error.apiNotConfigured", "Chiave API non configurata"),
    ("error.rateLimitReached", "Limite di velocità raggiunto"),
    ("error.symbolNotFound", "Simbolo non trovato"),
    ("error.marketDataUnavailable", "Dati di mercato non disponibili"),
    ("common.loading", "Caricamento..."),
    ("common.save", "Salva"),
    ("common.cancel", "Annulla"),
    ("common.delete", "Elimina"),
    ("common.edit", "Modifica"),
    ("common.close", "Chiudi"),
    ("common.back", "Indietro"),
    ("common.next", "Avanti"),
    ("common.previous", "Precedente"),
    ("common.search", "Cerca"),
    ("common.filter", "Filtra"),
    ("common.export", "Esporta"),
    ("common.import", "Importa"),
    ("common.refresh", "Aggiorna"),
];

const HI: &[(&str, &str)] = &[
    ("nav.dashboard", "डैशबोर्ड"),
    ("nav.signals", "सिग्नल"),
    ("nav.history", "इतिहास"),
    ("nav.settings", "सेटिंग्स"),
    ("nav.admin", "एडमिन"),
    ("nav.login", "लॉगिन"),
    ("nav.logout", "लॉगआउट"),
    ("nav.getStarted", "शुरू करें"),
    ("language.english", "English"),
    ("language.arabic", "العربية"),
    ("language.french", "Français"),
    ("language.spanish", "Español"),
    ("language.german", "Deutsch"),
    ("language.italian", "Italiano"),
    ("language.hindi", "हिन्दी"),
    ("dashboard.title", "ट्रेडिंग डैशबोर्ड"),
    (
        "dashboard.subtitle",
        "AI-संचालित ट्रेडिंग सिग्नल जेनरेट करें और अपना खाता प्रबंधित करें",
    ),
    ("dashboard.currentPlan", "वर्तमान प्लान"),
    ("dashboard.signalsToday", "आज के सिग्नल"),
    ("dashboard.remaining", "शेष"),
    ("dashboard.needMoreSignals", "अधिक सिग्नल चाहिए?"),
    (
        "dashboard.upgradeDesc",
        "अधिक दैनिक सिग्नल और उन्नत सुविधाओं के लिए Pro या Elite में अपग्रेड करें",
    ),
    ("dashboard.viewPlans", "प्लान देखें"),
    ("signal.title", "ट्रेडिंग सिग्नल जेनरेट करें"),
    ("signal.tradingPair", "ट्रेडिंग जोड़ी"),
    ("signal.tradingSchool", "ट्रेडिंग स्कूल"),
    ("signal.advancedSettings", "उन्नत सेटिंग्स"),
    ("signal.candleCount", "कैंडल संख्या"),
    ("signal.aiProvider", "AI प्रदाता"),
    ("signal.generateSignal", "सिग्नल जेनरेट करें"),
    ("signal.fetchMarketData", "मार्केट डेटा प्राप्त करें"),
    ("signal.marketDataReady", "मार्केट डेटा तैयार"),
    ("signal.demoData", "डेमो डेटा"),
    ("signal.fetchingData", "डेटा प्राप्त कर रहे हैं..."),
    ("signal.analyzingMarket", "मार्केट का विश्लेषण..."),
    (
        "signal.dailyLimitReached",
        "दैनिक सीमा पहुंच गई। अधिक सिग्नल के लिए अपना प्लान अपग्रेड करें।",
    ),
    ("market.symbol", "प्रतीक"),
    ("market.candles5min", "5मिनट कैंडल"),
    ("market.candles15min", "15मिनट कैंडल"),
    ("market.candles1h", "1घंटा कैंडल"),
    ("market.candles4h", "4घंटे कैंडल"),
    ("stats.accountType", "खाता प्रकार"),
    ("stats.dailyLimit", "दैनिक सीमा"),
    ("stats.usedToday", "आज उपयोग"),
    ("stats.selectedPair", "चयनित जोड़ी"),
    ("stats.dataSource", "डेटा स्रोत"),
    ("stats.live", "लाइव"),
    ("stats.demo", "डेमो"),
    ("api.connected", "API कनेक्टेड"),
    ("api.disconnected", "API डिस्कनेक्टेड"),
    ("api.checking", "जांच रहे हैं..."),
    ("api.demoDataUsed", "डेमो डेटा उपयोग में"),
    ("api.retry", "पुनः प्रयास"),
    ("error.apiNotConfigured", "API की कॉन्फ़िगर नहीं"),
    ("error.rateLimitReached", "दर सीमा पहुंच गई"),
    ("error.symbolNotFound", "प्रतीक नहीं मिला"),
    ("error.marketDataUnavailable", "मार्केट डेटा उपलब्ध नहीं"),
    ("common.loading", "लोड हो रहा है..."),
    ("common.save", "सेव करें"),
    ("common.cancel", "रद्द करें"),
    ("common.delete", "हटाएं"),
    ("common.edit", "संपादित करें"),
    ("common.close", "बंद करें"),
    ("common.back", "वापस"),
    ("common.next", "अगला"),
    ("common.previous", "पिछला"),
    ("common.search", "खोजें"),
    ("common.filter", "फ़िल्टर"),
    ("common.export", "निर्यात"),
    ("common.import", "आयात"),
    ("common.refresh", "रीफ्रेश"),
];
