//! Built-in word lists
//!
//! Identifiers that show up all over C, C++, Python and shell sources, and
//! the fragments left over when an English contraction is split on its
//! apostrophe. Both lists are plain data and are added to the dictionary with
//! full lowercasing.

/// Common library names and keywords of C/C++, Python and Bourne shells
pub const KEYWORDS: &[&str] = &[
    "abs", "acos", "acosl", "alloc", "amode", "and", "argc", "argv", "asctime", "asin", "asinl",
    "atan", "atan2", "atan2l", "atanl", "atexit", "atof", "atoi", "atol", "bitset", "bool",
    "boolalpha", "brk", "bsearch", "calloc", "ceil", "ceill", "cerr", "cgets", "chdir", "chmod",
    "cin", "clearerr", "cmode", "cmp", "conio", "const", "const_iterator", "cosh", "coshl",
    "cosl", "cout", "cprintf", "cputs", "creat", "cscanf", "cstdlib", "ctime", "ctype",
    "delitem", "delslice", "difftime", "divmod", "dup", "dup2", "ecvt", "elif", "endif", "endl",
    "eq", "errno", "esac", "excepthook", "exec", "execl", "execle", "execlp", "execlpe",
    "execv", "execve", "execvp", "execvpe", "exp", "expl", "extern", "fabs", "fabsl", "fclose",
    "fcloseall", "fcntl", "fcvt", "fdopen", "feof", "ferror", "fflush", "fgetc", "fgetchar",
    "fgetpos", "fgets", "fi", "fileno", "floorl", "flushall", "fmod", "fmodl", "fopen",
    "fprint", "fprintf", "fputc", "fputchar", "fputs", "fread", "freopen", "frexp", "frexpl",
    "fscanf", "fseek", "fsetpos", "fstat", "fstream", "ftell", "func", "fwrite", "gcvt",
    "getattr", "getc", "getch", "getchar", "getche", "getcwd", "getenv", "getitem", "getline",
    "getslice", "getstate", "getw", "gmtime", "gsignal", "hex", "hypot", "ifdef", "ifndef",
    "ifstream", "init", "inline", "int", "ios", "iostream", "isalnum", "isalpha", "isascii",
    "isatty", "iscntrl", "isdigit", "isgraph", "islower", "isprint", "ispunct", "isspace",
    "istring", "istrstream", "isupper", "isxdigit", "iterator", "itoa", "labs", "ldexp",
    "ldexpl", "ldiv", "len", "lfind", "localtime", "log10", "log10l", "logl", "longjmp",
    "lsearch", "lseek", "lshift", "ltoa", "malloc", "matherr", "mblen", "mbstowcs", "mbtowc",
    "memccpy", "memchr", "memcmp", "memcpy", "memicmp", "memmove", "memset", "mkdir", "mktemp",
    "mktime", "modf", "modfl", "mul", "namespace", "noboolalpha", "nocreate", "noreplace",
    "oct", "ofstream", "or", "ostream", "perror", "pow", "pow10", "pow10l", "powl", "printf",
    "putc", "putchar", "putenv", "putw", "qsort", "radd", "rcmp", "rdiv", "rdivmod", "readonly",
    "realloc", "repr", "resetiosflags", "rlshift", "rmdir", "rmod", "rmul", "rop", "ror",
    "rpow", "rrshift", "rshift", "rsub", "rxor", "sbrk", "scanf", "setbase", "setbuf", "setf",
    "setfill", "setiosflags", "setitem", "setjmp", "setmode", "setprecision", "setslice",
    "setstate", "setvbuf", "setw", "showbase", "showpoint", "showpos", "signal", "sinhl",
    "sinl", "sizeof", "skipws", "spawnl", "spawnle", "spawnlp", "spawnlpe", "spawnv", "spawnve",
    "spawnvp", "spawnvpe", "sprintf", "sqrt", "sqrtl", "srand", "sscanf", "stat", "std",
    "stderr", "stdin", "stdio", "stdlib", "stdout", "stime", "stpcpy", "str", "strcat",
    "strchr", "strcmp", "strcmpi", "strcoll", "strcpy", "strcspn", "strdup", "strerror",
    "strftime", "stricmp", "strlen", "strlwr", "strncat", "strncmp", "strncmpi", "strncpy",
    "strnicmp", "strnset", "strpbrk", "strrchr", "strrev", "strset", "strspn", "strstr",
    "strstream", "strtod", "strtok", "strtol", "strtoul", "struct", "strupr", "strxfrm",
    "substr", "swprintf", "tanh", "tanhl", "tanl", "tmpfile", "tmpnam", "toascii", "tolower",
    "toupper", "trunc", "tuple", "typedef", "typename", "tzset", "ultoa", "undef", "ungetc",
    "ungetch", "unitbuf", "unset", "uppercase", "va", "vfprintf", "vfscanf", "vprintf",
    "vscanf", "vsprintf", "vsscanf", "wcstombs", "wctomb", "xrange", "xor",
];

/// Contraction fragments: `didn't` tokenizes to `didn` and `t`
pub const CONTRACTIONS: &[&str] = &[
    "ain", "aren", "couldn", "didn", "doesn", "hadn", "hasn", "isn", "ll", "mayn",
    "mightn", "mustn", "needn", "oughtn", "shan", "shouldn", "twouldn", "wasn", "weren",
    "wouldn",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_are_not_empty() {
        assert!(KEYWORDS.len() > 100);
        assert!(CONTRACTIONS.contains(&"didn"));
        assert!(KEYWORDS.contains(&"argv"));
    }

    #[test]
    fn test_entries_are_single_tokens() {
        for word in KEYWORDS.iter().chain(CONTRACTIONS) {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'),
                "{word}"
            );
        }
    }
}
