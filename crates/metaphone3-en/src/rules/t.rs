// 'T'

use crate::context::ScanContext;

pub(crate) fn encode(ctx: &mut ScanContext) {
    if encode_t_initial(ctx)
        || encode_tch(ctx)
        || encode_silent_french_t(ctx)
        || encode_tun_tul_tua_tuo(ctx)
        || encode_tue_teu_teou_tul_tie(ctx)
        || encode_tur_tiu_suffixes(ctx)
        || encode_ti(ctx)
        || encode_tient(ctx)
        || encode_tsch(ctx)
        || encode_tzsch(ctx)
        || encode_th_pronounced_separately(ctx)
        || encode_tth(ctx)
        || encode_th(ctx)
    {
        return;
    }

    // redundant 'T' or 'D'
    if ctx.string_at(ctx.current + 1, 1, &["T", "D"]) {
        ctx.current += 2;
    } else {
        ctx.current += 1;
    }
    ctx.add("T");
}

fn encode_t_initial(ctx: &mut ScanContext) -> bool {
    let cur = ctx.current;
    if cur != 0 {
        return false;
    }

    // Americans usually say "tzar" as "zar"
    if ctx.string_at(cur + 1, 3, &["SAR", "ZAR"]) {
        ctx.current += 1;
        return true;
    }

    // old EFEO transliteration of Chinese where "TS-" => X
    if (ctx.length() == 3 && ctx.string_at(cur + 1, 2, &["SO", "SA", "SU"]))
        || (ctx.length() == 4 && ctx.string_at(cur + 1, 3, &["SAO", "SAI"]))
        || (ctx.length() == 5 && ctx.string_at(cur + 1, 4, &["SING", "SANG"]))
    {
        ctx.add("X");
        ctx.advance(3, 2);
        return true;
    }

    // "TS<vowel>-" is heard both with and without the 'T'
    if ctx.string_at(cur + 1, 1, &["S"]) && ctx.is_vowel_at(cur + 2) {
        ctx.add_alt("TS", "S");
        ctx.advance(3, 2);
        return true;
    }

    // "tjaarda"
    if ctx.peek(1) == 'J' {
        ctx.add("X");
        ctx.advance(3, 2);
        return true;
    }

    // initial "TH-" read as 'T' rather than '0'
    if (ctx.string_at(cur + 1, 2, &["HU"]) && ctx.length() == 3)
        || ctx.string_at(cur + 1, 3, &["HAI", "HUY", "HAO"])
        || ctx.string_at(cur + 1, 4, &["HYME", "HYMY", "HANH"])
        || ctx.string_at(cur + 1, 5, &["HERES"])
    {
        ctx.add("T");
        ctx.advance(3, 2);
        return true;
    }
    false
}

fn encode_tch(ctx: &mut ScanContext) -> bool {
    if ctx.string_at(ctx.current + 1, 2, &["CH"]) {
        ctx.add("X");
        ctx.current += 3;
        return true;
    }
    false
}

/// French silent 'T' familiar to Americans: 'ballet', 'gourmet', 'depot'.
fn encode_silent_french_t(ctx: &mut ScanContext) -> bool {
    let cur = ctx.current;
    if (cur == ctx.last() && ctx.string_at(cur - 4, 5, &["MONET", "GENET", "CHAUT"]))
        || ctx.string_at(cur - 2, 9, &["POTPOURRI"])
        || ctx.string_at(cur - 3, 9, &["BOATSWAIN"])
        || ctx.string_at(cur - 3, 8, &["MORTGAGE"])
        || ((ctx.string_at(
            cur - 4,
            5,
            &["BERET", "BIDET", "FILET", "DEBUT", "DEPOT", "PINOT", "TAROT"],
        ) || ctx.string_at(
            cur - 5,
            6,
            &[
                "BALLET", "BUFFET", "CACHET", "CHALET", "ESPRIT", "RAGOUT", "GOULET", "CHABOT",
                "BENOIT",
            ],
        ) || ctx.string_at(
            cur - 6,
            7,
            &[
                "GOURMET", "BOUQUET", "CROCHET", "CROQUET", "PARFAIT", "PINCHOT", "CABARET",
                "PARQUET", "RAPPORT", "TOUCHET", "COURBET", "DIDEROT",
            ],
        ) || ctx.string_at(
            cur - 7,
            8,
            &[
                "ENTREPOT", "CABERNET", "DUBONNET", "MASSENET", "MUSCADET", "RICOCHET", "ESCARGOT",
            ],
        ) || ctx.string_at(
            cur - 8,
            9,
            &[
                "SOBRIQUET", "CABRIOLET", "CASSOULET", "OUBRIQUET", "CAMEMBERT",
            ],
        )) && !ctx.string_at(cur + 1, 2, &["AN", "RY", "IC", "OM", "IN"]))
    {
        ctx.current += 1;
        return true;
    }
    false
}

/// "fortune", "capitulate", "obituary", "actual"
fn encode_tun_tul_tua_tuo(ctx: &mut ScanContext) -> bool {
    let cur = ctx.current;
    if ctx.string_at(cur - 3, 6, &["FORTUN"])
        || (ctx.string_at(cur, 3, &["TUL"]) && ctx.is_vowel_at(cur - 1) && ctx.is_vowel_at(cur + 3))
        || ctx.string_at(cur - 2, 5, &["BITUA", "BITUE"])
        || (cur > 1 && ctx.string_at(cur, 3, &["TUA", "TUO"]))
    {
        ctx.add_alt("X", "T");
        ctx.current += 1;
        return true;
    }
    false
}

/// 'constituent', 'pasteur', 'statue', 'patience'
fn encode_tue_teu_teou_tul_tie(ctx: &mut ScanContext) -> bool {
    let cur = ctx.current;
    if ctx.string_at(cur + 1, 4, &["UENT"])
        || ctx.string_at(cur - 4, 9, &["RIGHTEOUS"])
        || ctx.string_at(cur - 3, 7, &["STATUTE"])
        || ctx.string_at(cur - 3, 7, &["AMATEUR"])
        // "blastula", "pasteur"
        || ctx.string_at(cur - 1, 5, &["NTULE", "NTULA", "STULE", "STULA", "STEUR"])
        || (cur + 2 == ctx.last() && ctx.string_at(cur, 3, &["TUE"]))
        || ctx.string_at(cur, 5, &["TUENC"])
        || ctx.string_at(cur - 3, 8, &["STATUTOR"])
        || (cur + 5 == ctx.last() && ctx.string_at(cur, 6, &["TIENCE"]))
    {
        ctx.add_alt("X", "T");
        ctx.advance(2, 1);
        return true;
    }
    false
}

/// 'adventure', 'musculature'
fn encode_tur_tiu_suffixes(ctx: &mut ScanContext) -> bool {
    let cur = ctx.current;
    if !(cur > 0 && ctx.string_at(cur + 1, 3, &["URE", "URA", "URI", "URY", "URO", "IUS"])) {
        return false;
    }

    // mostly Romance words such as 'tessitura'; "kachaturian", "hematuria"
    if (ctx.string_at(cur + 1, 3, &["URA", "URO"])
        && cur + 3 == ctx.last()
        && !ctx.string_at(cur - 3, 7, &["VENTURA"]))
        || ctx.string_at(cur + 1, 4, &["URIA"])
    {
        ctx.add("T");
    } else {
        ctx.add_alt("X", "T");
    }
    ctx.advance(2, 1);
    true
}

/// "-TIO-", "-TIA-", "-TIU-", except combining forms where the 'T' is
/// already pronounced, e.g. 'rooseveltian'.
fn encode_ti(ctx: &mut ScanContext) -> bool {
    let cur = ctx.current;
    if !((ctx.string_at(cur + 1, 2, &["IO"]) && !ctx.string_at(cur - 1, 5, &["ETIOL"]))
        || ctx.string_at(cur + 1, 3, &["IAL"])
        || ctx.string_at(cur - 1, 5, &["RTIUM", "ATIUM"])
        || (ctx.string_at(cur + 1, 3, &["IAN"])
            && cur > 0
            && !(ctx.string_at(cur - 4, 8, &["FAUSTIAN"])
                || ctx.string_at(cur - 5, 9, &["PROUSTIAN"])
                || ctx.string_at(cur - 2, 7, &["TATIANA"])
                || ctx.string_at(cur - 3, 7, &["KANTIAN", "GENTIAN"])
                || ctx.string_at(cur - 8, 12, &["ROOSEVELTIAN"])))
        || (cur + 2 == ctx.last()
            && ctx.string_at(cur, 3, &["TIA"])
            // usually X
            && !(ctx.string_at(cur - 3, 6, &["HESTIA", "MASTIA"])
                || ctx.string_at(cur - 2, 5, &["OSTIA"])
                || ctx.string_at(0, 3, &["TIA"])
                || ctx.string_at(cur - 5, 8, &["IZVESTIA"])))
        || ctx.string_at(cur + 1, 4, &["IATE", "IATI", "IABL", "IATO", "IARY"])
        || ctx.string_at(cur - 5, 9, &["CHRISTIAN"]))
    {
        return false;
    }

    if (cur == 2 && ctx.string_at(0, 4, &["ANTI"]))
        || ctx.string_at(0, 5, &["PATIO", "PITIA", "DUTIA"])
    {
        ctx.add("T");
    } else if ctx.string_at(cur - 4, 8, &["EQUATION"]) {
        ctx.add("J");
    } else if ctx.string_at(cur, 4, &["TION"]) {
        ctx.add("X");
    } else if ctx.string_at(0, 5, &["KATIA", "LATIA"]) {
        ctx.add_alt("T", "X");
    } else {
        ctx.add_alt("X", "T");
    }
    ctx.advance(3, 1);
    true
}

/// 'patient'
fn encode_tient(ctx: &mut ScanContext) -> bool {
    if ctx.string_at(ctx.current + 1, 4, &["IENT"]) {
        ctx.add_alt("X", "T");
        ctx.advance(3, 1);
        return true;
    }
    false
}

/// 'deutsch', except German combining forms that pronounce the 'T'.
fn encode_tsch(ctx: &mut ScanContext) -> bool {
    let cur = ctx.current;
    if ctx.string_at(cur, 4, &["TSCH"]) && !ctx.string_at(cur - 3, 4, &["WELT", "KLAT", "FEST"]) {
        ctx.add("X");
        ctx.current += 4;
        return true;
    }
    false
}

/// 'nietzsche'
fn encode_tzsch(ctx: &mut ScanContext) -> bool {
    if ctx.string_at(ctx.current, 5, &["TZSCH"]) {
        ctx.add("X");
        ctx.current += 5;
        return true;
    }
    false
}

/// 'adulthood', 'bithead', 'apartheid', and a few words where "-TH-" is
/// usually 'T'.
fn encode_th_pronounced_separately(ctx: &mut ScanContext) -> bool {
    let cur = ctx.current;
    if (cur > 0
        && ctx.string_at(
            cur + 1,
            4,
            &[
                "HOOD", "HEAD", "HEID", "HAND", "HILL", "HOLD", "HAWK", "HEAP", "HERD", "HOLE",
                "HOOK", "HUNT", "HUMO", "HAUS", "HOFF", "HARD",
            ],
        )
        && !ctx.string_at(cur - 3, 5, &["SOUTH", "NORTH"]))
        || ctx.string_at(cur + 1, 5, &["HOUSE", "HEART", "HASTE", "HYPNO", "HEQUE"])
        // but the Greek root "-thallic"
        || (ctx.string_at(cur + 1, 4, &["HALL"])
            && cur + 4 == ctx.last()
            && !ctx.string_at(cur - 3, 5, &["SOUTH", "NORTH"]))
        || (ctx.string_at(cur + 1, 3, &["HAM"])
            && cur + 3 == ctx.last()
            && !(ctx.string_at(0, 6, &["GOTHAM", "WITHAM", "LATHAM"])
                || ctx.string_at(0, 7, &["BENTHAM", "WALTHAM", "WORTHAM"])
                || ctx.string_at(0, 8, &["GRANTHAM"])))
        || (ctx.string_at(cur + 1, 5, &["HATCH"])
            && !(cur == 0 || ctx.string_at(cur - 2, 8, &["UNTHATCH"])))
        || ctx.string_at(cur - 3, 7, &["WARTHOG"])
        || ctx.string_at(cur - 2, 6, &["ESTHER"])
        || ctx.string_at(cur - 3, 6, &["GOETHE"])
        || ctx.string_at(cur - 2, 8, &["NATHALIE"])
    {
        if ctx.string_at(cur - 3, 7, &["POSTHUM"]) {
            ctx.add("X");
        } else {
            ctx.add("T");
        }
        ctx.current += 2;
        return true;
    }
    false
}

/// 'matthew' vs. 'outthink'
fn encode_tth(ctx: &mut ScanContext) -> bool {
    let cur = ctx.current;
    if !ctx.string_at(cur, 3, &["TTH"]) {
        return false;
    }

    if ctx.string_at(cur - 2, 5, &["MATTH"]) {
        ctx.add("0");
    } else {
        ctx.add("T0");
    }
    ctx.current += 3;
    true
}

fn encode_th(ctx: &mut ScanContext) -> bool {
    let cur = ctx.current;
    if !ctx.string_at(cur, 2, &["TH"]) {
        return false;
    }

    // '-clothes-': the vowel is already encoded, skip to the 'S'
    if ctx.string_at(cur - 3, 7, &["CLOTHES"]) {
        ctx.current += 3;
        return true;
    }

    // "thomas", "thames", "beethoven", and Germanic words
    if ctx.string_at(
        cur + 2,
        4,
        &[
            "OMAS", "OMPS", "OMPK", "OMSO", "OMSE", "AMES", "OVEN", "OFEN", "ILDA", "ILDE",
        ],
    ) || (ctx.string_at(0, 4, &["THOM"]) && ctx.length() == 4)
        || (ctx.string_at(0, 5, &["THOMS"]) && ctx.length() == 5)
        || ctx.string_at(0, 4, &["VAN ", "VON "])
        || ctx.string_at(0, 3, &["SCH"])
    {
        ctx.add("T");
    } else if ctx.string_at(0, 2, &["SM"]) {
        // etymological alternate for "smith"
        ctx.add_alt("0", "T");
    } else {
        ctx.add("0");
    }
    ctx.current += 2;
    true
}

#[cfg(test)]
mod tests {
    use crate::rules::testing::{keys, pair, vowel_keys};

    #[test]
    fn th_forms() {
        assert_eq!(keys("thomas"), pair("TMS", ""));
        assert_eq!(keys("thompson"), pair("TMPSN", ""));
        assert_eq!(keys("matthew"), pair("M0", ""));
        assert_eq!(vowel_keys("matthew"), pair("MA0A", ""));
    }

    #[test]
    fn tch_and_tzsch() {
        assert_eq!(keys("tchaikovsky"), pair("XKFSK", ""));
        assert_eq!(keys("nietzsche"), pair("NX", ""));
        assert_eq!(keys("tzsch"), pair("X", ""));
    }

    #[test]
    fn silent_t() {
        assert_eq!(keys("beret"), pair("PR", ""));
        assert_eq!(keys("often"), pair("AFN", "AFTN"));
        assert_eq!(keys("nation"), pair("NXN", ""));
    }
}
